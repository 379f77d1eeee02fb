// tui.rs

//! Takes over the terminal for the chat screen and gives it back on exit or panic.

use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::*;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stderr};
use std::panic;
use std::time::Duration;

use crate::app::App;
use crate::inputs::handler::EventHandler;
use crate::ui::render;

type ChatTerminal = Terminal<CrosstermBackend<Stderr>>;

/// How long the event task waits for input before emitting a tick.
const TICK_RATE: Duration = Duration::from_millis(200);

/// The chat screen drawn on stderr, with the task polling its input.
pub(crate) struct Tui {
    terminal: ChatTerminal,
    pub(crate) events: EventHandler,
}

impl Tui {
    /// Switches to raw mode and the alternate screen, with mouse capture so
    /// the send button can be clicked. Starts polling input events.
    pub(crate) fn start() -> Result<Self> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
        enter_terminal()?;
        restore_on_panic();
        terminal.hide_cursor()?;
        terminal.clear()?;
        info!("---- {} started ----", env!("CARGO_PKG_NAME"));
        Ok(Self {
            terminal,
            events: EventHandler::new(TICK_RATE),
        })
    }

    /// Draws one frame. Rendering records where the send button is.
    pub(crate) fn draw(&mut self, app: &mut App) -> Result<()> {
        self.terminal.draw(|frame| render(frame, &mut app.state))?;
        Ok(())
    }

    /// Stops polling and hands the terminal back to the shell.
    pub(crate) fn stop(&mut self) -> Result<()> {
        self.events.close();
        leave_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn enter_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen, EnableMouseCapture)
}

fn leave_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)
}

// The panic message would be lost on the alternate screen
fn restore_on_panic() {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(err) = leave_terminal() {
            eprintln!("Could not restore the terminal: {}", err);
        }
        previous_hook(info);
    }));
}
