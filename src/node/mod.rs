// node/mod.rs

//! Local messaging node.
//!
//! Owns connectivity state and the light push peer count, and accepts light
//! push requests from the `App`. Runs in its own task and calls back the
//! `App` via mutex.

pub mod app_handler;

use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

use self::app_handler::NodeCmdEvent;
use crate::app::App;
use crate::config::ChatConfig;

/// Presence handle of a started node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeHandle {
    pub peer_id: String,
    pub started_at: DateTime<Local>,
}

impl NodeHandle {
    pub fn new() -> Self {
        let started_at = Local::now();
        Self {
            peer_id: format!("local-{}-{}", std::process::id(), started_at.timestamp()),
            started_at,
        }
    }
}

impl Default for NodeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub nick: String,
    pub content_topic: String,
    /// Light push peers found once discovery completes.
    pub initial_peers: usize,
    pub peer_discovery_delay: Duration,
}

impl From<&ChatConfig> for NodeConfig {
    fn from(config: &ChatConfig) -> Self {
        Self {
            nick: config.nick.clone(),
            content_topic: config.content_topic.clone(),
            initial_peers: config.initial_peers,
            peer_discovery_delay: config.peer_discovery_delay(),
        }
    }
}

pub struct Node<'a> {
    app: Arc<Mutex<App<'a>>>,
    config: NodeConfig,
    handle: Option<NodeHandle>,
    light_push_peers: usize,
    // Used to schedule commands to self, like the end of peer discovery.
    node_tx: UnboundedSender<NodeCmdEvent>,
}

impl Node<'static> {
    /// Handles commands until all senders are dropped.
    pub async fn run(mut self, mut rx: UnboundedReceiver<NodeCmdEvent>) {
        while let Some(cmd) = rx.recv().await {
            self.handle_app_event(cmd).await;
        }
    }
}

impl<'a> Node<'a> {
    pub fn new(
        app: Arc<Mutex<App<'a>>>,
        config: NodeConfig,
        node_tx: UnboundedSender<NodeCmdEvent>,
    ) -> Self {
        Self {
            app,
            config,
            handle: None,
            light_push_peers: 0,
            node_tx,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
