// app/callbacks.rs

//! Callback functions called by the node task (under locking)

use super::sender::{MessageSender, SendError};
use super::sent_messages::SentMessage;
use super::App;
use crate::node::NodeHandle;

use log::*;

impl App<'_> {
    /// Saves the node handle and hands the light push sender to the message input.
    pub(crate) fn cb_node_started(&mut self, node: NodeHandle) {
        info!("Node {} started", node.peer_id);
        let sender = self.light_push_sender();
        self.state.message_input.set_sender(sender);
        self.state.set_node(Some(node));
    }

    /// Updates the number of light push peers.
    pub(crate) fn cb_peers_changed(&mut self, light_push_peers: usize) {
        debug!("Light push peers: {}", light_push_peers);
        self.state.set_light_push_peers(light_push_peers);
    }

    /// Adds a message acknowledged by the node to the list of sent messages.
    pub(crate) fn cb_message_delivered(&mut self, message: SentMessage) {
        self.state.sent_messages.push(message);
    }

    /// Withdraws the sender and the node handle.
    pub(crate) fn cb_node_stopped(&mut self) {
        info!("Node stopped");
        self.state.message_input.set_sender(MessageSender::Absent);
        self.state.set_node(None);
        self.state.set_light_push_peers(0);
    }

    /// Called once a send started from the message input has settled.
    pub(crate) fn cb_send_settled(&mut self, result: Result<(), SendError>) {
        self.state.message_input.finish_send(result);
    }
}
