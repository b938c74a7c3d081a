//! Display-ready summaries of catalog books.
//!
//! The view layer never touches [`Book`] directly: it receives a [`PreviewSummary`] for each
//! grid entry and a [`DetailSummary`] for the detail overlay. Both are pure transformations
//! that only need an author lookup.

use crate::catalog::{Book, Catalog};
use crate::error::{BookError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Anything that can resolve an author id to a display name.
pub trait AuthorLookup {
    fn author_name(&self, author_id: &str) -> Option<&str>;
}

impl AuthorLookup for Catalog {
    fn author_name(&self, author_id: &str) -> Option<&str> {
        Catalog::author_name(self, author_id)
    }
}

impl AuthorLookup for BTreeMap<String, String> {
    fn author_name(&self, author_id: &str) -> Option<&str> {
        self.get(author_id).map(String::as_str)
    }
}

impl AuthorLookup for HashMap<String, String> {
    fn author_name(&self, author_id: &str) -> Option<&str> {
        self.get(author_id).map(String::as_str)
    }
}

/// One entry of the preview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSummary {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image_uri: String,
}

/// Content of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSummary {
    pub title: String,
    /// `"<author name> (<year>)"`
    pub author_year_label: String,
    pub description: String,
    pub image_uri: String,
}

fn resolve_author<'a, L>(book: &Book, authors: &'a L) -> Result<&'a str>
where
    L: AuthorLookup + ?Sized,
{
    authors
        .author_name(&book.author)
        .ok_or_else(|| BookError::missing_author(&book.id, &book.author))
}

pub fn to_preview<L>(book: &Book, authors: &L) -> Result<PreviewSummary>
where
    L: AuthorLookup + ?Sized,
{
    Ok(PreviewSummary {
        id: book.id.clone(),
        title: book.title.clone(),
        author_name: resolve_author(book, authors)?.to_string(),
        image_uri: book.image.clone(),
    })
}

/// Summarize a whole page, failing on the first book with an unknown author
pub fn to_previews<L>(books: &[Arc<Book>], authors: &L) -> Result<Vec<PreviewSummary>>
where
    L: AuthorLookup + ?Sized,
{
    books.iter().map(|book| to_preview(book, authors)).collect()
}

pub fn to_detail<L>(book: &Book, authors: &L) -> Result<DetailSummary>
where
    L: AuthorLookup + ?Sized,
{
    let author = resolve_author(book, authors)?;
    Ok(DetailSummary {
        title: book.title.clone(),
        author_year_label: format!("{} ({})", author, book.published_year()),
        description: book.description.clone(),
        image_uri: book.image.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{book, sample_catalog};
    use chrono::DateTime;

    #[test]
    fn test_preview_resolves_author() {
        let catalog = sample_catalog();
        let dune = catalog.find("1").unwrap();
        let preview = to_preview(dune.as_ref(), &catalog).unwrap();
        assert_eq!(
            preview,
            PreviewSummary {
                id: "1".to_string(),
                title: "Dune".to_string(),
                author_name: "Frank Herbert".to_string(),
                image_uri: "https://covers.example/1.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_author_is_an_error() {
        let orphan = book("9", "Orphan", "ghost", &["sf"]);
        let authors: HashMap<String, String> = HashMap::new();
        match to_preview(&orphan, &authors).unwrap_err() {
            BookError::MissingAuthor { book_id, author_id } => {
                assert_eq!(book_id, "9");
                assert_eq!(author_id, "ghost");
            }
            other => panic!("Expected MissingAuthor, got {other:?}"),
        }
        assert!(to_detail(&orphan, &authors).is_err());
    }

    #[test]
    fn test_to_previews_keeps_order() {
        let catalog = sample_catalog();
        let previews = to_previews(catalog.books(), &catalog).unwrap();
        let titles: Vec<&str> = previews.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Dune", "Dune Messiah", "Emma", "Foundation", "Pride and Prejudice"]
        );
    }

    #[test]
    fn test_detail_label_uses_encoded_year() {
        let mut authors = BTreeMap::new();
        authors.insert("a1".to_string(), "Frank Herbert".to_string());

        let mut dune = book("1", "Dune", "a1", &["sf"]);
        dune.published = DateTime::parse_from_rfc3339("1965-06-01T00:00:00Z").unwrap();
        let detail = to_detail(&dune, &authors).unwrap();
        assert_eq!(detail.author_year_label, "Frank Herbert (1965)");
        assert!(detail.author_year_label.ends_with("(1965)"));
        assert_eq!(detail.description, "About Dune");

        dune.published = DateTime::parse_from_rfc3339("1965-01-01T00:00:00Z").unwrap();
        assert!(to_detail(&dune, &authors)
            .unwrap()
            .author_year_label
            .ends_with("(1965)"));
    }
}
