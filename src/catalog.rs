//! Static book catalog with author and genre lookup tables.
//!
//! The catalog is loaded once at startup from a JSON document of the form
//! `{ "books": [...], "authors": { id: name }, "genres": { id: name } }` and is never
//! mutated afterwards. Books are held behind `Arc` so result sets and pages can share them
//! without copying.

pub mod book;
pub mod validation;

pub use book::Book;

use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Raw catalog document exactly as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub authors: BTreeMap<String, String>,
    #[serde(default)]
    pub genres: BTreeMap<String, String>,
}

/// Validated, read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
}

impl Catalog {
    /// Build a catalog from a decoded document, rejecting integrity violations
    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        validation::validate_document(&document)?;

        Ok(Self {
            books: document.books.into_iter().map(Arc::new).collect(),
            authors: document.authors,
            genres: document.genres,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load and validate a catalog file
    ///
    /// # Errors
    /// * Path validation errors (missing, not a file, empty)
    /// * Read failures
    /// * JSON decoding errors (`CatalogParse`)
    /// * Integrity violations (`MissingAuthor`, `MissingGenre`, `DuplicateBook`, `EmptyGenres`)
    pub async fn load(path: &Path) -> Result<Self> {
        validation::validate_catalog_path(path)?;

        let contents = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&contents)?;

        info!(
            "Loaded catalog from {}: {} books, {} authors, {} genres",
            path.display(),
            catalog.books.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );

        Ok(catalog)
    }

    /// Books in catalog order
    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look a book up by id
    pub fn find(&self, id: &str) -> Option<&Arc<Book>> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Author `(id, name)` pairs ordered by display name, for choice lists
    pub fn authors_by_name(&self) -> Vec<(String, String)> {
        sorted_by_name(&self.authors)
    }

    /// Genre `(id, name)` pairs ordered by display name, for choice lists
    pub fn genres_by_name(&self) -> Vec<(String, String)> {
        sorted_by_name(&self.genres)
    }
}

fn sorted_by_name(table: &BTreeMap<String, String>) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = table
        .iter()
        .map(|(id, name)| (id.clone(), name.clone()))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
