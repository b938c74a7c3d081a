//! Book records as they appear in the catalog document.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

/// Immutable catalog entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Author id, resolved through the catalog's author table
    pub author: String,
    /// Cover image URI
    pub image: String,
    pub description: String,
    /// Publication timestamp, kept with the offset it was encoded with
    pub published: DateTime<FixedOffset>,
    /// Genre ids, never empty in a validated catalog
    pub genres: Vec<String>,
}

impl Book {
    /// Calendar year of publication as encoded in the source timestamp.
    ///
    /// The year is read in the timestamp's own offset, so the viewer's local timezone can
    /// never shift a `1965-01-01T00:00:00Z` book into 1964.
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_published(published: &str) -> Book {
        Book {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "a1".to_string(),
            image: "https://covers.example/dune.jpg".to_string(),
            description: "Spice.".to_string(),
            published: DateTime::parse_from_rfc3339(published).unwrap(),
            genres: vec!["g1".to_string()],
        }
    }

    #[test]
    fn test_published_year_from_utc() {
        assert_eq!(book_published("1965-06-01T00:00:00Z").published_year(), 1965);
    }

    #[test]
    fn test_published_year_uses_encoded_offset() {
        // Midnight on New Year in UTC is still the previous year anywhere west of Greenwich;
        // the encoded value must win.
        assert_eq!(book_published("1965-01-01T00:00:00Z").published_year(), 1965);
        assert_eq!(
            book_published("1964-12-31T23:30:00-05:00").published_year(),
            1964
        );
        assert_eq!(
            book_published("1965-01-01T00:30:00+09:00").published_year(),
            1965
        );
    }

    #[test]
    fn test_deserialize_with_fractional_seconds() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "author": "a",
            "image": "i",
            "description": "d",
            "published": "2004-02-17T00:00:00.000Z",
            "genres": ["g"]
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.published_year(), 2004);
        assert!(book.has_genre("g"));
        assert!(!book.has_genre("h"));
    }
}
