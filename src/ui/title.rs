// ui/title.rs

//! Title bar with the node status.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use crate::app::state::AppState;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

pub fn draw_title<'a>(state: &AppState) -> Paragraph<'a> {
    let mut spans = vec![Span::styled(
        env!("CARGO_PKG_NAME"),
        Style::default().fg(Color::LightCyan),
    )];

    let node_status = match state.node() {
        Some(node) => Span::styled(
            format!(" | node {}", node.peer_id),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled(" | node starting", Style::default().fg(Color::Yellow)),
    };
    spans.push(node_status);

    let peers = state.light_push_peers();
    let peers_style = match peers {
        0 => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Green),
    };
    let plural = if peers == 1 { "" } else { "s" };
    spans.push(Span::styled(
        format!(" | {} light push peer{}", peers, plural),
        peers_style,
    ));
    spans.push(Span::raw(format!(" | {}", state.content_topic)));

    if state.message_input.is_sending() {
        spans.push(Span::styled(" (sending)", Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_type(BorderType::Plain),
        )
}
