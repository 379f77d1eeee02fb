// app/state.rs

use ratatui::layout::Rect;

use super::actions::{Action, Actions};
use super::message_input::MessageInput;
use super::sent_messages::SentMessages;
use crate::node::NodeHandle;

pub struct AppState<'a> {
    // App
    pub actions: Actions,
    pub nick: String,
    pub content_topic: String,

    // Node
    node: Option<NodeHandle>,
    light_push_peers: usize,

    // UI
    pub show_logs: bool,
    pub show_help: bool,
    pub message_input: MessageInput<'a>,
    pub sent_messages: SentMessages,
    /// Where the send button was last drawn, for mouse clicks.
    pub send_button_area: Rect,
}

impl AppState<'_> {
    pub fn new(nick: &str, content_topic: &str) -> Self {
        AppState {
            nick: nick.to_string(),
            content_topic: content_topic.to_string(),
            ..Default::default()
        }
    }

    pub fn node(&self) -> Option<&NodeHandle> {
        self.node.as_ref()
    }

    /// Sets the node handle and refreshes the send button.
    pub fn set_node(&mut self, node: Option<NodeHandle>) {
        self.message_input.set_node_present(node.is_some());
        self.node = node;
    }

    pub fn light_push_peers(&self) -> usize {
        self.light_push_peers
    }

    pub fn has_light_push_peers(&self) -> bool {
        self.light_push_peers > 0
    }

    /// Sets the number of light push peers and refreshes the send button.
    pub fn set_light_push_peers(&mut self, light_push_peers: usize) {
        self.light_push_peers = light_push_peers;
        self.message_input
            .set_has_light_push_peers(self.has_light_push_peers());
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        AppState {
            actions: vec![
                Action::Quit,
                Action::SendMessage,
                Action::ToggleHelp,
                Action::ToggleLogs,
                Action::TogglePeers,
            ]
            .into(),
            nick: String::new(),
            content_topic: String::new(),
            node: None,
            light_push_peers: 0,
            show_logs: false,
            show_help: true,
            message_input: MessageInput::default(),
            sent_messages: SentMessages::default(),
            send_button_area: Rect::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peers_drive_the_send_button() {
        let mut state = AppState::new("me", "/toy-chat/2/huilong/proto");
        state.set_node(Some(NodeHandle::new()));
        state.message_input.on_change("hello");
        assert!(!state.message_input.is_active());

        state.set_light_push_peers(3);
        assert!(state.has_light_push_peers());
        assert!(state.message_input.is_active());

        state.set_light_push_peers(0);
        assert!(!state.message_input.is_active());
    }
}
