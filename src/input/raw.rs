//! Low-level input collection: crossterm polling filtered down to the events the state
//! machine understands.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Collector that polls crossterm for key presses and resizes.
#[derive(Debug, Default)]
pub struct RawInputCollector;

impl RawInputCollector {
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for the next relevant event
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>> {
        let timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        Ok(Self::is_relevant(&event).then_some(event))
    }

    /// Key presses and resizes pass; mouse, focus, paste and key releases are dropped
    pub fn is_relevant(event: &Event) -> bool {
        match event {
            Event::Key(key) => key.kind == KeyEventKind::Press,
            Event::Resize(..) => true,
            _ => false,
        }
    }
}
