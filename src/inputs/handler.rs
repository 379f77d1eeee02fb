// inputs/handler.rs

//! Event handler that wraps crossterm input and tick event.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub enum Event {
    /// A key was pressed.
    Input(KeyEvent),
    /// The left mouse button was pressed.
    Click(MouseEvent),
    /// The terminal was resized.
    Resize,
    /// A tick event occurred.
    Tick,
}

/// Event handler that wraps crossterm input and tick event.
/// Events are polled in their own task and returned to a common `Receiver`
pub struct EventHandler {
    rx: tokio::sync::mpsc::Receiver<Event>,
    // Need to be kept around to prevent disposing the sender side.
    _tx: tokio::sync::mpsc::Sender<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs an new instance of `EventHandler` with the given `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(100);
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let event_stop_capture = stop_capture.clone();
        tokio::spawn(async move {
            loop {
                if let Some(event) = poll_terminal(tick_rate) {
                    if let Err(err) = event_tx.send(event).await {
                        error!("Could not send terminal event to main thread!, {}", err);
                    }
                }
                if let Err(err) = event_tx.send(Event::Tick).await {
                    error!("Could not send tick to main thread!, {}", err);
                }
                if event_stop_capture.load(Ordering::Relaxed) {
                    break;
                }
            }
        });

        EventHandler {
            rx,
            _tx: tx,
            stop_capture,
        }
    }

    /// Attempts to read an event.
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }

    /// Stops polling the terminal.
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}

// Waits up to `tick_rate` for a terminal event we care about.
fn poll_terminal(tick_rate: Duration) -> Option<Event> {
    match crossterm::event::poll(tick_rate) {
        Ok(true) => match crossterm::event::read() {
            // Only presses, release events are reported on some platforms
            Ok(crossterm::event::Event::Key(key_event))
                if key_event.kind == KeyEventKind::Press =>
            {
                Some(Event::Input(key_event))
            }
            Ok(crossterm::event::Event::Mouse(mouse_event))
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                Some(Event::Click(mouse_event))
            }
            Ok(crossterm::event::Event::Resize(_, _)) => Some(Event::Resize),
            Ok(_) => None,
            Err(err) => {
                error!("Could not read terminal event: {}", err);
                None
            }
        },
        Ok(false) => None,
        Err(err) => {
            error!("Could not poll terminal: {}", err);
            None
        }
    }
}
