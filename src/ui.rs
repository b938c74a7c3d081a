//! Terminal UI module with ratatui
//!
//! The view layer for the catalog pipeline: a grid of book previews, a footer carrying the
//! "show more" state, and search/settings/detail overlays. It follows a trait-based design
//! so the application can draw through a mock in tests.

pub mod forms;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use forms::{Choice, SearchField, SearchForm, SettingsForm};
pub use ratatui::style::{Color, Style};
pub use renderer::UIRenderer;
pub use state::{Overlay, SelectionMove, StatusLine, ViewState};
pub use terminal::TerminalUI;
pub use theme::{ColorTheme, ThemeName};

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
