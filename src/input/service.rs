//! High-level input handling.
//!
//! Runs the key-binding state machine and yields domain-level `InputAction`s that the
//! application applies to the catalog pipeline and view state.

use crate::ui::state::{Overlay, SelectionMove};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Current input mode; mirrors the open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
    Settings,
    Detail,
}

impl From<Overlay> for InputMode {
    fn from(overlay: Overlay) -> Self {
        match overlay {
            Overlay::None => InputMode::Browse,
            Overlay::Search => InputMode::Search,
            Overlay::Settings => InputMode::Settings,
            Overlay::Detail => InputMode::Detail,
        }
    }
}

/// High-level input actions emitted by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    MoveSelection(SelectionMove),
    ShowMore,
    OpenDetail,
    OpenSearch,
    OpenSettings,
    CloseOverlay,
    /// Type a character into the search title
    SearchInput(char),
    SearchBackspace,
    NextField,
    PreviousField,
    /// Step the focused choice list (`true` = forward)
    CycleChoice(bool),
    SubmitSearch,
    ToggleTheme,
    ApplySettings,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Key bindings per input mode.
pub struct InputStateMachine {
    mode: InputMode,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Browse,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Resynchronize with the overlay the application actually has open
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Translate a terminal event into an action
    pub fn handle_event(&mut self, event: Event) -> InputAction {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(width, height) => InputAction::Resize { width, height },
            _ => InputAction::NoAction,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let action = match self.mode {
            InputMode::Browse => Self::browse_key(key_event),
            InputMode::Search => Self::search_key(key_event),
            InputMode::Settings => Self::settings_key(key_event),
            InputMode::Detail => Self::detail_key(key_event),
        };

        self.mode = match (&action, self.mode) {
            (InputAction::OpenSearch, _) => InputMode::Search,
            (InputAction::OpenSettings, _) => InputMode::Settings,
            (InputAction::OpenDetail, _) => InputMode::Detail,
            (InputAction::CloseOverlay, _)
            | (InputAction::SubmitSearch, _)
            | (InputAction::ApplySettings, _) => InputMode::Browse,
            (_, mode) => mode,
        };

        action
    }

    fn browse_key(key_event: KeyEvent) -> InputAction {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char('q') if plain => InputAction::Quit,
            KeyCode::Char('h') if plain => InputAction::MoveSelection(SelectionMove::Left),
            KeyCode::Left => InputAction::MoveSelection(SelectionMove::Left),
            KeyCode::Char('l') if plain => InputAction::MoveSelection(SelectionMove::Right),
            KeyCode::Right => InputAction::MoveSelection(SelectionMove::Right),
            KeyCode::Char('k') if plain => InputAction::MoveSelection(SelectionMove::Up),
            KeyCode::Up => InputAction::MoveSelection(SelectionMove::Up),
            KeyCode::Char('j') if plain => InputAction::MoveSelection(SelectionMove::Down),
            KeyCode::Down => InputAction::MoveSelection(SelectionMove::Down),
            KeyCode::Char('g') if plain => InputAction::MoveSelection(SelectionMove::First),
            KeyCode::Home => InputAction::MoveSelection(SelectionMove::First),
            KeyCode::Char('G') if plain => InputAction::MoveSelection(SelectionMove::Last),
            KeyCode::End => InputAction::MoveSelection(SelectionMove::Last),
            KeyCode::Char('m') | KeyCode::Char(' ') if plain => InputAction::ShowMore,
            KeyCode::Enter => InputAction::OpenDetail,
            KeyCode::Char('/') if plain => InputAction::OpenSearch,
            KeyCode::Char('s') if plain => InputAction::OpenSettings,
            _ => InputAction::InvalidInput,
        }
    }

    fn search_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::CloseOverlay
            }
            KeyCode::Esc => InputAction::CloseOverlay,
            KeyCode::Enter => InputAction::SubmitSearch,
            KeyCode::Tab | KeyCode::Down => InputAction::NextField,
            KeyCode::BackTab | KeyCode::Up => InputAction::PreviousField,
            KeyCode::Left => InputAction::CycleChoice(false),
            KeyCode::Right => InputAction::CycleChoice(true),
            KeyCode::Backspace => InputAction::SearchBackspace,
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputAction::SearchInput(ch)
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn settings_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::CloseOverlay
            }
            KeyCode::Esc | KeyCode::Char('q') => InputAction::CloseOverlay,
            KeyCode::Enter => InputAction::ApplySettings,
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char(' ') => InputAction::ToggleTheme,
            _ => InputAction::InvalidInput,
        }
    }

    fn detail_key(key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::CloseOverlay
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                InputAction::CloseOverlay
            }
            _ => InputAction::InvalidInput,
        }
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
