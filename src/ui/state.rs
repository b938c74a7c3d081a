//! UI state management structures
//!
//! `ViewState` holds everything the renderer draws: the previews delivered so far, the
//! selection, the show-more affordance, overlays and their forms. Filtering and paging are
//! done by the application; this module only stores the results.

use crate::catalog::Catalog;
use crate::pagination::ShowMore;
use crate::preview::{DetailSummary, PreviewSummary};
use crate::ui::forms::{SearchForm, SettingsForm};
use crate::ui::theme::ThemeName;

/// Width in columns of one preview card
pub const PREVIEW_WIDTH: u16 = 32;

/// Height in rows of one preview card (border, title, author, border)
pub const PREVIEW_HEIGHT: u16 = 4;

/// Message shown in place of the grid when a search matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Overlay drawn on top of the preview grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Search,
    Settings,
    Detail,
}

/// Selection movement inside the preview grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Previews delivered so far, in result order
    pub previews: Vec<PreviewSummary>,

    /// Index into `previews` of the focused card
    pub selected: usize,

    /// First grid row currently on screen
    pub scroll_row: usize,

    pub show_more: ShowMore,

    /// Set when the last search matched nothing
    pub no_results: bool,

    pub overlay: Overlay,

    /// Content of the detail overlay while it is open
    pub detail: Option<DetailSummary>,

    pub search_form: SearchForm,

    pub settings: SettingsForm,

    /// Theme currently applied
    pub theme: ThemeName,

    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(catalog: &Catalog, theme: ThemeName, viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            previews: Vec::new(),
            selected: 0,
            scroll_row: 0,
            show_more: ShowMore::new(0),
            no_results: false,
            overlay: Overlay::None,
            detail: None,
            search_form: SearchForm::new(catalog),
            settings: SettingsForm::new(theme),
            theme,
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
        }
    }

    /// Number of preview cards per grid row
    pub fn columns(&self) -> usize {
        usize::from((self.viewport_width / PREVIEW_WIDTH).max(1))
    }

    /// Number of grid rows that fit above the footer line
    pub fn visible_rows(&self) -> usize {
        usize::from((self.viewport_height.saturating_sub(1) / PREVIEW_HEIGHT).max(1))
    }

    /// Replace the list after a new search
    pub fn replace_previews(&mut self, previews: Vec<PreviewSummary>, show_more: ShowMore) {
        self.no_results = previews.is_empty();
        self.previews = previews;
        self.show_more = show_more;
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Append a freshly delivered window
    pub fn append_previews(&mut self, previews: Vec<PreviewSummary>, show_more: ShowMore) {
        self.previews.extend(previews);
        self.show_more = show_more;
    }

    pub fn selected_preview(&self) -> Option<&PreviewSummary> {
        self.previews.get(self.selected)
    }

    /// Move the focused card, clamping to the delivered previews
    pub fn move_selection(&mut self, movement: SelectionMove) {
        if self.previews.is_empty() {
            self.selected = 0;
            return;
        }

        let last = self.previews.len() - 1;
        let columns = self.columns();
        self.selected = match movement {
            SelectionMove::Left => self.selected.saturating_sub(1),
            SelectionMove::Right => (self.selected + 1).min(last),
            SelectionMove::Up => self.selected.saturating_sub(columns),
            SelectionMove::Down => (self.selected + columns).min(last),
            SelectionMove::First => 0,
            SelectionMove::Last => last,
        };
        self.ensure_selection_visible();
    }

    /// Scroll so the focused card's row is on screen
    pub fn ensure_selection_visible(&mut self) {
        let row = self.selected / self.columns();
        let rows = self.visible_rows();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        if overlay == Overlay::Settings {
            self.settings = SettingsForm::new(self.theme);
        }
        self.overlay = overlay;
    }

    pub fn close_overlay(&mut self) {
        if self.overlay == Overlay::Detail {
            self.detail = None;
        }
        self.overlay = Overlay::None;
    }

    /// Update terminal dimensions
    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;

        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            self.ensure_selection_visible();
        }

        changed
    }

    /// Format the footer line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            self.show_more,
            self.previews.len(),
            self.theme,
        )
    }
}

/// Footer line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Everything after the show-more label, e.g. ` | 6 shown | day | message`
    pub fn format_details(&self, shown: usize, theme: ThemeName) -> String {
        let base = format!(" | {} shown | {}", shown, theme);
        match self.message {
            Some(ref message) => format!("{base} | {message}"),
            None => base,
        }
    }

    pub fn format_status_line(&self, show_more: ShowMore, shown: usize, theme: ThemeName) -> String {
        format!("{}{}", show_more.label(), self.format_details(shown, theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::sample_catalog;

    fn preview(id: usize) -> PreviewSummary {
        PreviewSummary {
            id: id.to_string(),
            title: format!("Book {id}"),
            author_name: "Frank Herbert".to_string(),
            image_uri: String::new(),
        }
    }

    fn state_with(count: usize, width: u16, height: u16) -> ViewState {
        let mut state = ViewState::new(&sample_catalog(), ThemeName::Day, width, height);
        state.replace_previews((0..count).map(preview).collect(), ShowMore::new(0));
        state
    }

    #[test]
    fn test_view_state_creation() {
        let state = ViewState::new(&sample_catalog(), ThemeName::Night, 80, 24);
        assert!(state.previews.is_empty());
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(state.settings.pending, ThemeName::Night);
        assert_eq!(state.columns(), 2);
        assert_eq!(state.visible_rows(), 5);
        assert!(!state.no_results);
    }

    #[test]
    fn test_replace_and_append() {
        let mut state = state_with(6, 80, 24);
        state.selected = 4;
        state.append_previews(vec![preview(6)], ShowMore::new(3));
        assert_eq!(state.previews.len(), 7);
        assert_eq!(state.selected, 4);
        assert_eq!(state.show_more, ShowMore::new(3));

        state.replace_previews(Vec::new(), ShowMore::new(0));
        assert!(state.no_results);
        assert_eq!(state.selected, 0);
        assert!(state.selected_preview().is_none());
    }

    #[test]
    fn test_grid_selection_movement() {
        // 96 columns -> three cards per row
        let mut state = state_with(7, 96, 24);
        assert_eq!(state.columns(), 3);

        state.move_selection(SelectionMove::Down);
        assert_eq!(state.selected, 3);
        state.move_selection(SelectionMove::Right);
        assert_eq!(state.selected, 4);
        state.move_selection(SelectionMove::Down);
        assert_eq!(state.selected, 6);
        state.move_selection(SelectionMove::Right);
        assert_eq!(state.selected, 6);
        state.move_selection(SelectionMove::Up);
        assert_eq!(state.selected, 3);
        state.move_selection(SelectionMove::First);
        assert_eq!(state.selected, 0);
        state.move_selection(SelectionMove::Left);
        assert_eq!(state.selected, 0);
        state.move_selection(SelectionMove::Last);
        assert_eq!(state.selected_preview().map(|p| p.id.as_str()), Some("6"));
    }

    #[test]
    fn test_selection_scrolls_grid() {
        // one column, (9 - 1) / 4 = 2 visible rows
        let mut state = state_with(6, 20, 9);
        assert_eq!(state.visible_rows(), 2);
        state.move_selection(SelectionMove::Down);
        assert_eq!(state.scroll_row, 0);
        state.move_selection(SelectionMove::Down);
        assert_eq!(state.scroll_row, 1);
        state.move_selection(SelectionMove::Last);
        assert_eq!(state.scroll_row, 4);
        state.move_selection(SelectionMove::First);
        assert_eq!(state.scroll_row, 0);
    }

    #[test]
    fn test_overlays() {
        let mut state = state_with(1, 80, 24);
        state.theme = ThemeName::Night;
        state.open_overlay(Overlay::Settings);
        assert_eq!(state.settings.pending, ThemeName::Night);

        state.open_overlay(Overlay::Detail);
        state.detail = Some(DetailSummary {
            title: "Dune".to_string(),
            author_year_label: "Frank Herbert (1965)".to_string(),
            description: String::new(),
            image_uri: String::new(),
        });
        state.close_overlay();
        assert_eq!(state.overlay, Overlay::None);
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = state_with(2, 80, 24);
        assert!(!state.update_terminal_size(80, 24));
        assert!(state.update_terminal_size(120, 30));
        assert_eq!(state.viewport_width, 120);
        assert_eq!(state.columns(), 3);
    }

    #[test]
    fn test_status_line_format() {
        let mut state = state_with(6, 80, 24);
        state.show_more = ShowMore::new(14);
        assert_eq!(state.format_status_line(), "Show more (14) | 6 shown | day");

        state.status_line.set_message("No more books");
        assert_eq!(
            state.format_status_line(),
            "Show more (14) | 6 shown | day | No more books"
        );

        state.status_line.clear_message();
        assert!(!state.format_status_line().contains("No more"));
    }
}
