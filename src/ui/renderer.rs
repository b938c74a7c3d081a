//! The drawing seam between [`Application`](crate::app::Application) and the terminal.
//!
//! The application only ever hands a renderer a finished [`ViewState`]; everything about
//! cells, colors and layout lives behind this trait. Tests substitute a renderer that just
//! counts frames.

use crate::error::Result;
use crate::ui::state::ViewState;
use crate::ui::theme::ColorTheme;

pub trait UIRenderer {
    /// Draw one frame from `view_state`.
    ///
    /// Called once after `initialize` and again after every handled event. A renderer that
    /// has not been initialized may skip drawing and return `Ok`.
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Take over the output device; called once before the first frame.
    fn initialize(&mut self) -> Result<()>;

    /// Give the output device back. Safe to call more than once.
    fn cleanup(&mut self) -> Result<()>;

    /// `(columns, rows)` available for the grid and footer.
    ///
    /// Queried before `initialize`, when the application sizes its first `ViewState`.
    fn get_terminal_size(&self) -> Result<(u16, u16)>;

    /// Colors for every frame drawn after this call
    fn set_theme(&mut self, theme: ColorTheme);
}
