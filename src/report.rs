//! Non-interactive rendering target: the pipeline's output as a serializable report.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{match_books, FilterCriteria};
use crate::pagination::{Paginator, ShowMore};
use crate::preview::{to_previews, PreviewSummary};
use serde::Serialize;

/// What a viewer would show after a search and some "show more" presses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    pub criteria: FilterCriteria,
    /// Books matching the criteria
    pub total: usize,
    pub page_size: usize,
    /// Pages delivered so far
    pub pages: usize,
    pub previews: Vec<PreviewSummary>,
    pub show_more: ShowMore,
}

impl PageReport {
    /// Run the search and deliver `pages` pages (at least one)
    pub fn build(
        catalog: &Catalog,
        criteria: FilterCriteria,
        paginator: &mut Paginator,
        pages: usize,
    ) -> Result<Self> {
        paginator.adopt(match_books(catalog, &criteria));

        let mut books = paginator.first_window()?;
        for _ in 1..pages.max(1) {
            if !paginator.show_more().enabled {
                break;
            }
            books.extend(paginator.next_window()?);
        }

        Ok(Self {
            criteria,
            total: paginator.result_len(),
            page_size: paginator.page_size(),
            pages: paginator.cursor(),
            previews: to_previews(&books, catalog)?,
            show_more: paginator.show_more(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{numbered_catalog, sample_catalog};

    #[test]
    fn test_first_page_report() {
        let catalog = numbered_catalog(20);
        let mut paginator = Paginator::default();
        let report =
            PageReport::build(&catalog, FilterCriteria::default(), &mut paginator, 1).unwrap();
        assert_eq!(report.total, 20);
        assert_eq!(report.pages, 1);
        assert_eq!(report.previews.len(), 6);
        assert_eq!(report.show_more, ShowMore::new(14));
    }

    #[test]
    fn test_multiple_pages_stop_at_end() {
        let catalog = numbered_catalog(20);
        let mut paginator = Paginator::default();
        let report =
            PageReport::build(&catalog, FilterCriteria::default(), &mut paginator, 10).unwrap();
        assert_eq!(report.previews.len(), 20);
        assert_eq!(report.pages, 4);
        assert!(!report.show_more.enabled);
    }

    #[test]
    fn test_report_json_shape() {
        let catalog = sample_catalog();
        let mut paginator = Paginator::default();
        let report =
            PageReport::build(&catalog, FilterCriteria::title("DUNE"), &mut paginator, 1).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["criteria"]["genre"], "any");
        assert_eq!(json["criteria"]["title"], "DUNE");
        assert_eq!(json["previews"][1]["title"], "Dune Messiah");
        assert_eq!(json["previews"][1]["author_name"], "Frank Herbert");
        assert_eq!(json["show_more"]["enabled"], false);
    }
}
