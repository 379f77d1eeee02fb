// ui/messages.rs

//! Panel with the messages sent in this session.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, List, ListItem};

use crate::app::state::AppState;

pub const MESSAGES_MIN_HEIGHT: u16 = 6;
pub const MESSAGES_MIN_WIDTH: u16 = 40;

/// Draws the most recent sent messages that fit in `area`, newest at the bottom.
pub fn draw_sent_messages<'a>(state: &AppState, area: &Rect) -> List<'a> {
    // Minus the borders
    let visible = area.height.saturating_sub(2) as usize;
    let skip = state.sent_messages.len().saturating_sub(visible);

    let items = state
        .sent_messages
        .iter()
        .skip(skip)
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    message.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("<{}> ", message.nick),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(message.text.clone()),
            ]))
        })
        .collect::<Vec<_>>();

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Sent messages"),
    )
}
