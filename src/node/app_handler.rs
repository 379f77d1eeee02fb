// node/app_handler.rs

//! Handles events received from the `App` main thread.
//!
//! Callbacks to the `App` are made via mutex.

use super::{Node, NodeHandle};
use crate::app::sender::SendError;
use crate::app::sent_messages::SentMessage;

use log::*;
use tokio::sync::oneshot;

/// Commands the main `App` can send to the node task.
#[derive(Debug)]
pub enum NodeCmdEvent {
    Start,
    /// Publish a message; the outcome is sent back on the oneshot channel.
    LightPush(String, oneshot::Sender<Result<(), SendError>>),
    SetPeers(usize),
    TogglePeers,
    Stop,
}

impl Node<'_> {
    /// Handle a `NodeCmdEvent` dispatched by the App.
    pub async fn handle_app_event(&mut self, cmd: NodeCmdEvent) {
        match cmd {
            NodeCmdEvent::Start => self.do_start().await,
            NodeCmdEvent::LightPush(text, reply) => {
                let result = self.do_light_push(&text).await;
                if reply.send(result).is_err() {
                    warn!("Light push result dropped, nobody is waiting for it");
                }
            }
            NodeCmdEvent::SetPeers(light_push_peers) => self.do_set_peers(light_push_peers).await,
            NodeCmdEvent::TogglePeers => self.do_toggle_peers().await,
            NodeCmdEvent::Stop => self.do_stop().await,
        }
    }

    /// Creates the node handle, reports it to the app and starts peer discovery.
    async fn do_start(&mut self) {
        if self.is_running() {
            warn!("Node already started");
            return;
        }
        let handle = NodeHandle::new();
        self.handle = Some(handle.clone());
        self.app.lock().await.cb_node_started(handle);
        debug!(
            "Discovering light push peers on {} for {:?}",
            self.config.content_topic, self.config.peer_discovery_delay
        );

        let node_tx = self.node_tx.clone();
        let delay = self.config.peer_discovery_delay;
        let peers = self.config.initial_peers;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = node_tx.send(NodeCmdEvent::SetPeers(peers)) {
                error!("Could not report discovered peers: {}", e);
            }
        });
    }

    /// Publishes `text` to the light push peers and reports the delivery to the app.
    async fn do_light_push(&mut self, text: &str) -> Result<(), SendError> {
        if !self.is_running() {
            return Err(SendError::NodeNotRunning);
        }
        if self.light_push_peers == 0 {
            return Err(SendError::NoLightPushPeers);
        }
        debug!(
            "Pushed {} bytes on {} to {} peer(s)",
            text.len(),
            self.config.content_topic,
            self.light_push_peers
        );
        let message = SentMessage::new(&self.config.nick, text);
        self.app.lock().await.cb_message_delivered(message);
        Ok(())
    }

    async fn do_set_peers(&mut self, light_push_peers: usize) {
        if !self.is_running() {
            debug!("Ignoring peer update while stopped");
            return;
        }
        self.light_push_peers = light_push_peers;
        self.app.lock().await.cb_peers_changed(light_push_peers);
    }

    /// Drops all peers, or restores the configured ones (at least one).
    async fn do_toggle_peers(&mut self) {
        let light_push_peers = if self.light_push_peers > 0 {
            0
        } else {
            self.config.initial_peers.max(1)
        };
        self.do_set_peers(light_push_peers).await;
    }

    async fn do_stop(&mut self) {
        if self.handle.take().is_none() {
            return;
        }
        self.light_push_peers = 0;
        self.app.lock().await.cb_node_stopped();
    }
}
