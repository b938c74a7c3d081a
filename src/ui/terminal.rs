//! Terminal UI implementation using ratatui
//!
//! Draws the preview grid, the footer and whichever overlay is open. All content comes from
//! `ViewState`; this module never filters or pages anything itself.

use crate::error::{BookError, Result};
use crate::ui::forms::SearchField;
use crate::ui::state::{Overlay, ViewState, NO_RESULTS_MESSAGE, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::ui::theme::{ColorTheme, ThemeName};
use crate::ui::UIRenderer;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const FOOTER_HINTS: &str = " | / search  s settings  m more  enter open  q quit";

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }
}

/// Draw one complete frame
pub fn draw_view(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
    let size = frame.size();
    frame.render_widget(Block::default().style(theme.text), size);

    // Split screen: preview grid and footer line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(size);

    if view_state.no_results {
        render_no_results(frame, chunks[0], theme);
    } else {
        render_grid(frame, chunks[0], view_state, theme);
    }
    render_footer(frame, chunks[1], view_state, theme);

    match view_state.overlay {
        Overlay::None => {}
        Overlay::Search => render_search_overlay(frame, size, view_state, theme),
        Overlay::Settings => render_settings_overlay(frame, size, view_state, theme),
        Overlay::Detail => render_detail_overlay(frame, size, view_state, theme),
    }
}

/// Position of a grid card, or None when it falls outside `area`
fn card_rect(area: Rect, column: usize, row: usize) -> Option<Rect> {
    let x = u32::from(area.x) + column as u32 * u32::from(PREVIEW_WIDTH);
    let y = u32::from(area.y) + row as u32 * u32::from(PREVIEW_HEIGHT);
    let right = u32::from(area.x) + u32::from(area.width);
    let bottom = u32::from(area.y) + u32::from(area.height);

    if x >= right || y + u32::from(PREVIEW_HEIGHT) > bottom {
        return None;
    }

    let width = (right - x).min(u32::from(PREVIEW_WIDTH));
    Some(Rect::new(x as u16, y as u16, width as u16, PREVIEW_HEIGHT))
}

fn render_grid(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    let columns = view_state.columns();

    for (row, row_index) in (view_state.scroll_row..).enumerate() {
        let first = row_index * columns;
        if first >= view_state.previews.len() {
            break;
        }

        for column in 0..columns {
            let index = first + column;
            let Some(preview) = view_state.previews.get(index) else {
                break;
            };
            let Some(rect) = card_rect(area, column, row) else {
                return;
            };

            let style = if index == view_state.selected {
                theme.selected
            } else {
                theme.text
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    preview.title.as_str(),
                    style.add_modifier(Modifier::BOLD),
                )),
                Line::from(preview.author_name.as_str()),
            ])
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));

            frame.render_widget(card, rect);
        }
    }
}

fn render_no_results(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let message = Paragraph::new(NO_RESULTS_MESSAGE)
        .alignment(Alignment::Center)
        .style(theme.text)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    let label_style = if view_state.show_more.enabled {
        theme.status.fg(theme.accent)
    } else {
        theme.disabled
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(view_state.show_more.label(), label_style),
        Span::raw(
            view_state
                .status_line
                .format_details(view_state.previews.len(), view_state.theme),
        ),
        Span::raw(FOOTER_HINTS),
    ]))
    .style(theme.status);
    frame.render_widget(footer, area);
}

/// Rect of `percent_x` by `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn overlay_block<'a>(title: &'a str, theme: &ColorTheme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(theme.text)
}

fn render_search_overlay(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    let form = &view_state.search_form;
    let field_style = |field: SearchField| {
        if form.focus == field {
            theme.selected
        } else {
            theme.text
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Title:  "),
            Span::styled(format!("[{}]", form.title), field_style(SearchField::Title)),
        ]),
        Line::from(vec![
            Span::raw("Genre:  "),
            Span::styled(
                format!("< {} >", form.selected_genre().label),
                field_style(SearchField::Genre),
            ),
        ]),
        Line::from(vec![
            Span::raw("Author: "),
            Span::styled(
                format!("< {} >", form.selected_author().label),
                field_style(SearchField::Author),
            ),
        ]),
        Line::from(""),
        Line::from("enter search  tab next field  left/right change  esc cancel"),
    ];

    let rect = centered_rect(60, 40, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(overlay_block("Search", theme)),
        rect,
    );
}

fn render_settings_overlay(
    frame: &mut Frame,
    area: Rect,
    view_state: &ViewState,
    theme: &ColorTheme,
) {
    let option = |name: ThemeName, label: &'static str| {
        if view_state.settings.pending == name {
            Span::styled(format!("({label})"), theme.selected)
        } else {
            Span::styled(format!(" {label} "), theme.text)
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Theme: "),
            option(ThemeName::Day, "Day"),
            Span::raw("  "),
            option(ThemeName::Night, "Night"),
        ]),
        Line::from(""),
        Line::from("enter save  left/right change  esc cancel"),
    ];

    let rect = centered_rect(50, 30, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(overlay_block("Settings", theme)),
        rect,
    );
}

fn render_detail_overlay(
    frame: &mut Frame,
    area: Rect,
    view_state: &ViewState,
    theme: &ColorTheme,
) {
    let Some(detail) = view_state.detail.as_ref() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            detail.author_year_label.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(detail.description.as_str()),
        Line::from(""),
        Line::from(format!("Cover: {}", detail.image_uri)),
        Line::from(""),
        Line::from("esc close"),
    ];

    let rect = centered_rect(80, 70, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(overlay_block(detail.title.as_str(), theme))
            .wrap(Wrap { trim: true }),
        rect,
    );
}

/// Wrap a terminal backend failure with what was being attempted
fn backend_error(action: &'static str) -> impl FnOnce(io::Error) -> BookError {
    move |err| BookError::ui(format!("{action}: {err}"))
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal
                .draw(move |frame| draw_view(frame, view_state, theme))
                .map_err(backend_error("drawing frame"))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(backend_error("enabling raw mode"))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(backend_error("entering alternate screen"))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(backend_error("creating terminal"))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.take().is_some() {
            disable_raw_mode().map_err(backend_error("disabling raw mode"))?;
            execute!(io::stdout(), LeaveAlternateScreen)
                .map_err(backend_error("leaving alternate screen"))?;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        ratatui::crossterm::terminal::size().map_err(backend_error("querying terminal size"))
    }

    fn set_theme(&mut self, theme: ColorTheme) {
        self.theme = theme;
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
