//! Incremental paging over a result set.
//!
//! The paginator owns the active [`ResultSet`] and a cursor counting pages already
//! delivered. Adopting a new result set resets the cursor to 1: the caller renders the
//! first page itself (see [`Paginator::first_window`]) and every "show more" request then
//! pulls the next window with [`Paginator::next_window`].

use crate::catalog::Book;
use crate::error::{BookError, Result};
use crate::filter::ResultSet;
use log::debug;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// State of the "show more" affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    pub remaining: usize,
    pub enabled: bool,
}

impl ShowMore {
    pub fn new(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    /// Button label, e.g. `Show more (12)`
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Cursor over the active result set.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: NonZeroUsize,
    /// Pages already delivered; always >= 1 once a result set is adopted
    cursor: usize,
    active: Option<ResultSet>,
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            cursor: 1,
            active: None,
        }
    }

    /// Create a paginator, rejecting a zero page size
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        NonZeroUsize::new(page_size)
            .map(Self::new)
            .ok_or_else(|| BookError::invalid_argument("page size must be a positive integer"))
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_adopted(&self) -> bool {
        self.active.is_some()
    }

    /// Length of the active result set, 0 before any adopt
    pub fn result_len(&self) -> usize {
        self.active.as_ref().map_or(0, ResultSet::len)
    }

    pub fn result_set(&self) -> Option<&ResultSet> {
        self.active.as_ref()
    }

    /// Replace the active result set; the first page counts as delivered
    pub fn adopt(&mut self, result_set: ResultSet) {
        debug!("adopting result set of {} books", result_set.len());
        self.active = Some(result_set);
        self.cursor = 1;
    }

    /// Books not yet delivered
    pub fn remaining(&self) -> usize {
        self.result_len()
            .saturating_sub(self.cursor.saturating_mul(self.page_size()))
    }

    pub fn show_more(&self) -> ShowMore {
        ShowMore::new(self.remaining())
    }

    /// The first page `[0, page_size)`, rendered by the caller right after adopting.
    ///
    /// Does not move the cursor.
    pub fn first_window(&self) -> Result<Vec<Arc<Book>>> {
        let active = self.active()?;
        Ok(Self::slice(active, 0, self.page_size()))
    }

    /// Deliver the window `[cursor * page_size, (cursor + 1) * page_size)` and advance.
    ///
    /// The window is clipped to the result set and may be empty; the cursor advances
    /// regardless.
    pub fn next_window(&mut self) -> Result<Vec<Arc<Book>>> {
        let page_size = self.page_size();
        let start = self.cursor.saturating_mul(page_size);
        let window = Self::slice(self.active()?, start, page_size);

        self.cursor += 1;
        debug!(
            "delivered window of {} books, cursor now {}, {} remaining",
            window.len(),
            self.cursor,
            self.remaining()
        );

        Ok(window)
    }

    fn active(&self) -> Result<&ResultSet> {
        self.active
            .as_ref()
            .ok_or_else(|| BookError::invalid_state("no result set adopted"))
    }

    fn slice(results: &ResultSet, start: usize, len: usize) -> Vec<Arc<Book>> {
        let books = results.as_slice();
        let start = start.min(books.len());
        let end = start.saturating_add(len).min(books.len());
        books[start..end].to_vec()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_PAGE_SIZE).expect("default page size is non-zero"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::numbered_catalog;
    use proptest::prelude::*;

    fn results(count: usize) -> ResultSet {
        ResultSet::all(&numbered_catalog(count))
    }

    fn ids(window: &[Arc<Book>]) -> Vec<String> {
        window.iter().map(|book| book.id.clone()).collect()
    }

    #[test]
    fn test_twenty_items_in_pages_of_six() {
        let mut paginator = Paginator::default();
        paginator.adopt(results(20));

        // The first page comes from first_window; cursor 1 already counts it.
        let mut lengths = vec![paginator.first_window().unwrap().len()];
        lengths.extend((0..2).map(|_| paginator.next_window().unwrap().len()));
        assert_eq!(lengths, vec![6, 6, 6]);
        assert_eq!(paginator.cursor(), 3);
        assert_eq!(paginator.remaining(), 2);

        let last = paginator.next_window().unwrap();
        assert_eq!(ids(&last), vec!["18", "19"]);
        assert_eq!(paginator.remaining(), 0);
        assert!(!paginator.show_more().enabled);
    }

    #[test]
    fn test_first_window_and_remaining_after_adopt() {
        let mut paginator = Paginator::default();
        paginator.adopt(results(20));

        let first = paginator.first_window().unwrap();
        assert_eq!(ids(&first), vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(paginator.cursor(), 1);
        assert_eq!(paginator.remaining(), 14);
        assert_eq!(paginator.show_more().label(), "Show more (14)");

        let second = paginator.next_window().unwrap();
        assert_eq!(ids(&second), vec!["6", "7", "8", "9", "10", "11"]);
    }

    #[test]
    fn test_empty_result_set() {
        let mut paginator = Paginator::default();
        paginator.adopt(ResultSet::default());

        assert_eq!(paginator.remaining(), 0);
        assert_eq!(paginator.show_more(), ShowMore::new(0));
        assert!(paginator.first_window().unwrap().is_empty());
        assert!(paginator.next_window().unwrap().is_empty());
        assert_eq!(paginator.cursor(), 2);
    }

    #[test]
    fn test_cursor_advances_past_end() {
        let mut paginator = Paginator::with_page_size(6).unwrap();
        paginator.adopt(results(3));
        assert!(paginator.next_window().unwrap().is_empty());
        assert!(paginator.next_window().unwrap().is_empty());
        assert_eq!(paginator.cursor(), 3);
        assert_eq!(paginator.remaining(), 0);
    }

    #[test]
    fn test_adopt_resets_cursor() {
        let mut paginator = Paginator::with_page_size(2).unwrap();
        paginator.adopt(results(10));
        paginator.next_window().unwrap();
        paginator.next_window().unwrap();
        assert_eq!(paginator.cursor(), 3);

        let replacement: ResultSet = results(10).iter().rev().cloned().collect();
        paginator.adopt(replacement);
        assert_eq!(paginator.cursor(), 1);
        assert_eq!(ids(&paginator.first_window().unwrap()), vec!["9", "8"]);
        assert_eq!(ids(&paginator.next_window().unwrap()), vec!["7", "6"]);
    }

    #[test]
    fn test_operations_before_adopt() {
        let mut paginator = Paginator::default();
        assert!(!paginator.is_adopted());
        assert_eq!(paginator.remaining(), 0);
        assert!(matches!(
            paginator.next_window().unwrap_err(),
            BookError::InvalidState { .. }
        ));
        assert!(matches!(
            paginator.first_window().unwrap_err(),
            BookError::InvalidState { .. }
        ));
        assert_eq!(paginator.cursor(), 1);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            Paginator::with_page_size(0).unwrap_err(),
            BookError::InvalidArgument { .. }
        ));
    }

    proptest! {
        #[test]
        fn prop_windows_partition_result_set(len in 0usize..60, page_size in 1usize..10) {
            let mut paginator = Paginator::with_page_size(page_size).unwrap();
            let set = results(len);
            paginator.adopt(set.clone());

            let mut delivered = paginator.first_window().unwrap();
            while paginator.remaining() > 0 {
                let before = paginator.remaining();
                let window = paginator.next_window().unwrap();
                prop_assert!(!window.is_empty());
                prop_assert!(window.len() <= page_size);
                prop_assert_eq!(paginator.remaining(), before - window.len());
                delivered.extend(window);
            }

            prop_assert_eq!(ids(&delivered), ids(set.as_slice()));
        }
    }
}
