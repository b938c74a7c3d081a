//! Catalog integrity checks.
//!
//! Run once when a catalog is built. A catalog that passes these checks never produces
//! `MissingAuthor`/`MissingGenre` from the preview renderer.

use crate::catalog::{Book, CatalogDocument};
use crate::error::{BookError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Verify that every book is unique and only references known authors and genres.
///
/// # Error Cases
/// - Two books share an id (`DuplicateBook`)
/// - A book lists no genres (`EmptyGenres`)
/// - A book's author id is absent from the author table (`MissingAuthor`)
/// - A book's genre id is absent from the genre table (`MissingGenre`)
pub fn validate_document(document: &CatalogDocument) -> Result<()> {
    let mut seen = HashSet::with_capacity(document.books.len());

    for book in &document.books {
        if !seen.insert(book.id.as_str()) {
            return Err(BookError::DuplicateBook {
                id: book.id.clone(),
            });
        }
        validate_book(book, document)?;
    }

    Ok(())
}

fn validate_book(book: &Book, document: &CatalogDocument) -> Result<()> {
    if book.genres.is_empty() {
        return Err(BookError::EmptyGenres {
            book_id: book.id.clone(),
        });
    }

    if !document.authors.contains_key(&book.author) {
        return Err(BookError::missing_author(&book.id, &book.author));
    }

    if let Some(unknown) = book
        .genres
        .iter()
        .find(|genre| !document.genres.contains_key(genre.as_str()))
    {
        return Err(BookError::missing_genre(&book.id, unknown));
    }

    Ok(())
}

/// Validate that a catalog path points at a readable, non-empty regular file
pub fn validate_catalog_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BookError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| BookError::file_error("Failed to read catalog metadata", e))?;

    if !metadata.is_file() {
        return Err(BookError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(BookError::file_error(
            format!("Catalog file is empty: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "Empty file"),
        ));
    }

    Ok(())
}
