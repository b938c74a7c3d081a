//! Application orchestration layer
//!
//! Wires the catalog pipeline to the view: search submissions run the matcher and reset
//! the paginator, "show more" pulls the next window, and every delivered book is turned
//! into a preview before it reaches `ViewState`. The paginator is the only owner of paging
//! state.

pub mod runtime;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{match_books, FilterCriteria, ResultSet};
use crate::input::{InputAction, InputMode, InputStateMachine};
use crate::pagination::Paginator;
use crate::preview::{to_detail, to_previews};
use crate::ui::{ColorTheme, Overlay, ThemeName, UIRenderer, ViewState};
use log::{debug, warn};
use ratatui::crossterm::event::Event;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    catalog: Arc<Catalog>,
    paginator: Paginator,
    ui_renderer: Box<dyn UIRenderer>,
    input: InputStateMachine,
    view_state: ViewState,
}

impl Application {
    /// Create the application and render the unfiltered catalog's first page
    pub fn new(
        catalog: Arc<Catalog>,
        paginator: Paginator,
        theme: ThemeName,
        mut ui_renderer: Box<dyn UIRenderer>,
    ) -> Result<Self> {
        let (width, height) = ui_renderer.get_terminal_size()?;
        let view_state = ViewState::new(&catalog, theme, width, height);
        ui_renderer.set_theme(ColorTheme::from(theme));

        let mut app = Self {
            catalog,
            paginator,
            ui_renderer,
            input: InputStateMachine::new(),
            view_state,
        };

        let everything = ResultSet::all(&app.catalog);
        app.adopt_results(everything)?;
        // The initial listing is not a search; an empty catalog is not "no results".
        app.view_state.no_results = false;

        Ok(app)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the event loop until the user quits or the event source closes
    pub async fn run(&mut self, mut events: UnboundedReceiver<Event>) -> Result<()> {
        self.ui_renderer.initialize()?;
        self.ui_renderer.render(&self.view_state)?;

        let outcome = self.event_loop(&mut events).await;

        self.ui_renderer.cleanup()?;
        outcome
    }

    async fn event_loop(&mut self, events: &mut UnboundedReceiver<Event>) -> Result<()> {
        while let Some(event) = events.recv().await {
            if !self.handle_event(event)? {
                break;
            }
            self.ui_renderer.render(&self.view_state)?;
        }
        Ok(())
    }

    /// Feed one terminal event through the key bindings - returns false if should quit
    ///
    /// The keymap always follows the overlay in `ViewState`, including overlays opened
    /// directly through `open_detail` or `submit_search`.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        self.input.set_mode(InputMode::from(self.view_state.overlay));
        let action = self.input.handle_event(event);
        let running = self.apply(action)?;
        self.input.set_mode(InputMode::from(self.view_state.overlay));
        Ok(running)
    }

    /// Execute an action - returns false if should quit
    pub fn apply(&mut self, action: InputAction) -> Result<bool> {
        match action {
            InputAction::Quit => return Ok(false),
            InputAction::MoveSelection(movement) => self.view_state.move_selection(movement),
            InputAction::ShowMore => {
                self.show_more()?;
            }
            InputAction::OpenDetail => self.open_selected_detail()?,
            InputAction::OpenSearch => {
                self.view_state.status_line.clear_message();
                self.view_state.open_overlay(Overlay::Search);
            }
            InputAction::OpenSettings => self.view_state.open_overlay(Overlay::Settings),
            InputAction::CloseOverlay => self.view_state.close_overlay(),
            InputAction::SearchInput(ch) => self.view_state.search_form.push_char(ch),
            InputAction::SearchBackspace => self.view_state.search_form.pop_char(),
            InputAction::NextField => self.view_state.search_form.focus_next(),
            InputAction::PreviousField => self.view_state.search_form.focus_previous(),
            InputAction::CycleChoice(forward) => self.view_state.search_form.cycle(forward),
            InputAction::SubmitSearch => {
                let criteria = self.view_state.search_form.criteria();
                self.submit_search(&criteria)?;
            }
            InputAction::ToggleTheme => self.view_state.settings.toggle(),
            InputAction::ApplySettings => {
                let theme = self.view_state.settings.pending;
                self.apply_theme(theme);
                self.view_state.close_overlay();
            }
            InputAction::Resize { width, height } => {
                self.view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction => {}
            InputAction::InvalidInput => debug!("ignoring unbound key"),
        }
        Ok(true)
    }

    /// Run a search: filter, adopt the results and render their first page
    pub fn submit_search(&mut self, criteria: &FilterCriteria) -> Result<()> {
        let results = match_books(&self.catalog, criteria);
        self.adopt_results(results)?;
        self.view_state.close_overlay();
        self.view_state.status_line.clear_message();
        Ok(())
    }

    fn adopt_results(&mut self, results: ResultSet) -> Result<()> {
        self.paginator.adopt(results);
        let first = self.paginator.first_window()?;
        let previews = to_previews(&first, self.catalog.as_ref())?;
        self.view_state
            .replace_previews(previews, self.paginator.show_more());
        Ok(())
    }

    /// Append the next window; returns how many previews were added.
    ///
    /// When nothing remains the paginator is left untouched, matching a disabled button.
    pub fn show_more(&mut self) -> Result<usize> {
        if !self.paginator.show_more().enabled {
            self.view_state.status_line.set_message("No more books");
            return Ok(0);
        }

        let window = self.paginator.next_window()?;
        let previews = to_previews(&window, self.catalog.as_ref())?;
        let added = previews.len();
        self.view_state
            .append_previews(previews, self.paginator.show_more());
        self.view_state.status_line.clear_message();
        Ok(added)
    }

    /// Open the detail overlay for the focused preview
    pub fn open_selected_detail(&mut self) -> Result<()> {
        let Some(id) = self.view_state.selected_preview().map(|p| p.id.clone()) else {
            self.view_state.status_line.set_message("Nothing selected");
            self.view_state.close_overlay();
            return Ok(());
        };
        self.open_detail(&id)
    }

    /// Open the detail overlay for a book id
    pub fn open_detail(&mut self, id: &str) -> Result<()> {
        let Some(book) = self.catalog.find(id) else {
            warn!("preview {id} has no catalog entry");
            self.view_state
                .status_line
                .set_message(format!("Book {id} not found"));
            self.view_state.close_overlay();
            return Ok(());
        };

        let detail = to_detail(book, self.catalog.as_ref())?;
        self.view_state.detail = Some(detail);
        self.view_state.open_overlay(Overlay::Detail);
        Ok(())
    }

    pub fn apply_theme(&mut self, theme: ThemeName) {
        debug!("applying {theme} theme");
        self.view_state.theme = theme;
        self.ui_renderer.set_theme(ColorTheme::from(theme));
    }
}
