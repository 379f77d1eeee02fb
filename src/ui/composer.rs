// ui/composer.rs

//! Message input and send button.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_textarea::TextArea;

use crate::app::state::AppState;

pub const COMPOSER_HEIGHT: u16 = 3;
pub const SEND_BUTTON_WIDTH: u16 = 10;

// Draws the text box where the user types a message.
pub fn draw_message_input<'a>(state: &'a AppState<'a>) -> TextArea<'a> {
    let title = if state.message_input.is_active() {
        Span::styled("Enter to send", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Waiting for light push peers", Style::default().fg(Color::Gray))
    };

    let mut textarea = state.message_input.textarea().clone();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Type a message, or /command");
    textarea
}

// Draws the send button, dimmed while inactive.
pub fn draw_send_button<'a>(state: &AppState) -> Paragraph<'a> {
    let style = if state.message_input.is_active() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new("Send")
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
}
