// app/message_input.rs

//! Single line input used to type a message and hand it to the sender.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::*;
use tui_textarea::{CursorMove, Input, Key, TextArea};

use super::sender::{MessageSender, SendError, SendFuture};

/// Leading character of a client command.
pub const COMMAND_PREFIX: char = '/';

/// Computes whether the send button is active.
///
/// Commands and available light push peers activate the button. Otherwise
/// the button is deactivated only when the node is present, and keeps its
/// `previous` value when it is not.
pub fn activation(
    text: &str,
    has_light_push_peers: bool,
    node_present: bool,
    previous: bool,
) -> bool {
    if text.starts_with(COMMAND_PREFIX) || has_light_push_peers {
        true
    } else if node_present {
        false
    } else {
        previous
    }
}

/// Whether the key is Enter without Alt, Ctrl or Shift.
pub fn is_plain_enter(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Enter
        && !key_event
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::SHIFT)
}

#[derive(Default)]
pub struct MessageInput<'a> {
    textarea: TextArea<'a>,
    input_text: String,
    is_active: bool,
    has_light_push_peers: bool,
    node_present: bool,
    sender: MessageSender,
    in_flight: usize,
}

impl<'a> MessageInput<'a> {
    /// Returns the current input text.
    pub fn text(&self) -> &str {
        &self.input_text
    }

    /// Whether the send button is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether at least one send has not settled yet.
    pub fn is_sending(&self) -> bool {
        self.in_flight > 0
    }

    /// Returns the textarea holding the cursor and edit buffer.
    pub fn textarea(&self) -> &TextArea<'a> {
        &self.textarea
    }

    pub fn has_light_push_peers(&self) -> bool {
        self.has_light_push_peers
    }

    pub fn set_has_light_push_peers(&mut self, has_light_push_peers: bool) {
        self.has_light_push_peers = has_light_push_peers;
        self.update_activation();
    }

    pub fn set_node_present(&mut self, node_present: bool) {
        self.node_present = node_present;
        self.update_activation();
    }

    pub fn sender(&self) -> &MessageSender {
        &self.sender
    }

    pub fn set_sender(&mut self, sender: MessageSender) {
        self.sender = sender;
    }

    /// Replaces the input text.
    pub fn on_change(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        if self.textarea.lines().join("\n") != new_value {
            self.textarea = textarea_with_text(&new_value);
        }
        self.input_text = new_value;
        self.update_activation();
    }

    /// Handles a key pressed while the input has focus.
    ///
    /// Returns the pending send when a plain Enter triggered one.
    /// Enter never reaches the edit buffer, with or without modifiers.
    pub fn on_key_down(&mut self, key_event: KeyEvent) -> Option<SendFuture> {
        if key_event.code == KeyCode::Enter {
            if self.is_active && is_plain_enter(&key_event) {
                return self.begin_send();
            }
            trace!("Ignoring {:?}, button active: {}", key_event, self.is_active);
            return None;
        }

        let input = Input::from(key_event);
        if inserts_newline(&input) {
            return None;
        }
        if self.textarea.input(input) {
            let new_value = self.textarea.lines().join("\n");
            self.on_change(new_value);
        }
        None
    }

    /// Handles a click on the send button, which does nothing while inactive.
    ///
    /// Returns the pending send when the click triggered one.
    pub fn on_button_click(&mut self) -> Option<SendFuture> {
        if !self.is_active {
            trace!("Ignoring click on inactive send button");
            return None;
        }
        self.begin_send()
    }

    /// Sends the current text and clears the input once the send settled.
    pub async fn on_message(&mut self) {
        if let Some(pending) = self.begin_send() {
            let result = pending.await;
            self.finish_send(result);
        }
    }

    /// Starts sending the current text.
    ///
    /// Does nothing when there is no sender or the text is empty.
    pub fn begin_send(&mut self) -> Option<SendFuture> {
        if self.input_text.is_empty() {
            return None;
        }
        let pending = self.sender.send(self.input_text.clone())?;
        self.in_flight += 1;
        debug!("Sending message of {} bytes", self.input_text.len());
        Some(pending)
    }

    /// Completes a send started with `begin_send`.
    /// Failures are logged only, and the text is cleared either way.
    pub fn finish_send(&mut self, result: Result<(), SendError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Err(e) = result {
            error!("Failed to send message: {}", e);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.input_text.clear();
        self.textarea = TextArea::default();
        self.update_activation();
    }

    fn update_activation(&mut self) {
        self.is_active = activation(
            &self.input_text,
            self.has_light_push_peers,
            self.node_present,
            self.is_active,
        );
    }
}

/// Builds a textarea with the cursor at the end of `text`.
fn textarea_with_text<'a>(text: &str) -> TextArea<'a> {
    // Textarea does not support newlines in the text.
    let lines = text.split('\n').map(|s| s.to_string()).collect::<Vec<_>>();
    let mut textarea = TextArea::new(lines);
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

// Ctrl+M is bound to newline by the textarea
fn inserts_newline(input: &Input) -> bool {
    matches!(
        input,
        Input {
            key: Key::Enter,
            ..
        } | Input {
            key: Key::Char('m'),
            ctrl: true,
            ..
        }
    )
}
