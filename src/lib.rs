//! # bookconnect - Terminal Book Browser
//!
//! Filter a static book catalog by title, author and genre, page through the matches as a
//! grid of previews, and open a detail view for any of them.
//!
//! ## Architecture
//!
//! The catalog pipeline is three small pure-ish components over a read-only catalog:
//!
//! - [`catalog`] - Book records plus author/genre lookup tables, loaded once
//! - [`filter`] - Matcher: criteria in, ordered result set out
//! - [`pagination`] - Paginator: owns the active result set and the page cursor
//! - [`preview`] - Preview renderer: books to display-ready summaries
//!
//! Around it sit the view layer and its plumbing:
//!
//! - [`ui`] - ratatui terminal UI, view state, themes
//! - [`input`] - key bindings per overlay
//! - [`app`] - Application loop coordinating the above
//! - [`config`] - TOML configuration and command-line overrides
//! - [`report`] - JSON rendering of a page for non-interactive use
//! - [`error`] - Centralized error types

// Core modules
pub mod catalog;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod preview;

// View layer
pub mod input;
pub mod ui;

// Application components
pub mod app;
pub mod config;
pub mod report;

// Re-export commonly used types for convenience
pub use error::{BookError, Result};

// Public API surface for external usage
pub use app::Application;
pub use catalog::{Book, Catalog};
pub use filter::{match_books, FilterCriteria, ResultSet, Selection};
pub use pagination::{Paginator, ShowMore};
pub use preview::{to_detail, to_preview, AuthorLookup, DetailSummary, PreviewSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
