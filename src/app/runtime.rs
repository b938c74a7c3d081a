use crate::input::RawInputCollector;
use log::warn;
use ratatui::crossterm::event::Event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Spawn a blocking thread that collects terminal events and forwards them onto a channel.
///
/// The application loop is the only consumer, so events are handled strictly one at a time.
pub fn spawn_input_thread(
    tx: UnboundedSender<Event>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut collector = RawInputCollector::new();
        while !shutdown.load(Ordering::SeqCst) {
            match collector.poll_event(Some(poll_interval)) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    // No input this tick; continue polling.
                    continue;
                }
                Err(err) => {
                    warn!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
