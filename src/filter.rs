//! Catalog filtering.
//!
//! A search submission is reduced to a [`FilterCriteria`] value; [`match_books`] applies it
//! to the catalog and yields a [`ResultSet`] in catalog order. Matching is a pure predicate:
//! no ranking, no sorting, no side effects.

use crate::catalog::{Book, Catalog};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Sentinel used by raw form input to mean "no constraint"
pub const ANY: &str = "any";

/// A genre or author constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    Any,
    Only(String),
}

impl Selection {
    /// Interpret a raw form value; `"any"` and blank input both mean no constraint
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ANY {
            Selection::Any
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Only(id) => id,
        }
    }
}

impl From<String> for Selection {
    fn from(raw: String) -> Self {
        Selection::parse(&raw)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_str().to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter constraints for one search submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub genre: Selection,
    #[serde(default)]
    pub author: Selection,
    /// Case-insensitive substring of the title; blank means no constraint
    #[serde(default)]
    pub title: String,
}

impl FilterCriteria {
    pub fn new(genre: Selection, author: Selection, title: impl Into<String>) -> Self {
        Self {
            genre,
            author,
            title: title.into(),
        }
    }

    /// Criteria matching only on a title substring
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build criteria from raw key/value input such as a submitted form.
    ///
    /// Recognized keys are `genre`, `author` and `title`. Missing keys leave the default
    /// (no constraint) in place; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "genre" => criteria.genre = Selection::parse(value.as_ref()),
                "author" => criteria.author = Selection::parse(value.as_ref()),
                "title" => criteria.title = value.as_ref().to_string(),
                other => debug!("ignoring unknown filter field {other:?}"),
            }
        }
        criteria
    }

    /// True when no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_any() && self.author.is_any() && self.title.trim().is_empty()
    }

    /// Single-book predicate: genre, title and author must all hold
    pub fn matches(&self, book: &Book) -> bool {
        self.genre_matches(book) && self.title_matches(book) && self.author_matches(book)
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Only(genre) => book.has_genre(genre),
        }
    }

    fn title_matches(&self, book: &Book) -> bool {
        // Blank check trims, the substring test does not.
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Only(author) => book.author == *author,
        }
    }
}

/// Ordered subset of the catalog produced by a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    books: Vec<Arc<Book>>,
}

impl ResultSet {
    pub fn new(books: Vec<Arc<Book>>) -> Self {
        Self { books }
    }

    /// Every book in the catalog, in catalog order
    pub fn all(catalog: &Catalog) -> Self {
        Self::new(catalog.books().to_vec())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn as_slice(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Book>> {
        self.books.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.id.as_str()).collect()
    }
}

impl FromIterator<Arc<Book>> for ResultSet {
    fn from_iter<T: IntoIterator<Item = Arc<Book>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Arc<Book>;
    type IntoIter = std::slice::Iter<'a, Arc<Book>>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// Select the catalog entries satisfying `criteria`, preserving catalog order
pub fn match_books(catalog: &Catalog, criteria: &FilterCriteria) -> ResultSet {
    let results: ResultSet = catalog
        .books()
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    debug!(
        "search genre={} author={} title={:?}: {} of {} books",
        criteria.genre,
        criteria.author,
        criteria.title,
        results.len(),
        catalog.len()
    );

    results
}
