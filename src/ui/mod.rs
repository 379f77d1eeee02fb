// ui/mod.rs

//! ratatui user interface

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod composer;
mod help;
mod logs;
mod messages;
mod title;

use crate::app::state::AppState;
use composer::{draw_message_input, draw_send_button, COMPOSER_HEIGHT, SEND_BUTTON_WIDTH};
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};
use messages::{draw_sent_messages, MESSAGES_MIN_HEIGHT, MESSAGES_MIN_WIDTH};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

/// Render all blocks, and remember where the send button landed.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    check_size(&area, state);

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(MESSAGES_MIN_HEIGHT + COMPOSER_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(area);

    // Title
    frame.render_widget(draw_title(state), app_rows[0]);

    // Body: messages + composer, help
    let mut body_constraints = vec![Constraint::Min(MESSAGES_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    let chat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MESSAGES_MIN_HEIGHT),
            Constraint::Length(COMPOSER_HEIGHT),
        ])
        .split(body_columns[0]);

    // Sent messages
    let messages_area = chat_rows[0];
    frame.render_widget(draw_sent_messages(state, &messages_area), messages_area);

    // Composer: the input fills the row, the button fits its label
    let composer_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(chat_rows[1]);
    frame.render_widget(&draw_message_input(state), composer_columns[0]);
    frame.render_widget(draw_send_button(state), composer_columns[1]);
    state.send_button_area = composer_columns[1];

    // Help
    if state.show_help {
        frame.render_widget(draw_help(&state.actions), body_columns[1]);
    }

    // Logs
    if state.show_logs {
        frame.render_widget(draw_logs(), app_rows[2]);
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = MESSAGES_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        warn!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = TITLE_BLOCK_HEIGHT + MESSAGES_MIN_HEIGHT + COMPOSER_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        warn!("Require height >= {}, (got {})", min_height, rect.height);
    }
}
