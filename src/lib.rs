// lib.rs

//! Terminal chat client publishing messages over light push.

use std::sync::Arc;

use color_eyre::eyre::Result;
use log::*;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::Mutex;

use crate::app::{spawn_send, App, AppReturn};
use crate::config::ChatConfig;
use crate::inputs::handler::Event;
use crate::node::app_handler::NodeCmdEvent;
use crate::node::{Node, NodeConfig};
use crate::tui::Tui;

pub mod app;
pub mod config;
pub mod inputs;
pub mod logger;
pub mod node;
mod tui;
mod ui;

/// Starts the node task and runs the user interface until the user quits.
pub async fn run(config: ChatConfig) -> Result<()> {
    // Channel to the node task
    let (app_to_node_tx, app_to_node_rx) = unbounded_channel::<NodeCmdEvent>();

    // We need to share the App between tasks
    let app = Arc::new(Mutex::new(App::new(
        app_to_node_tx.clone(),
        &config.nick,
        &config.content_topic,
    )));

    let node = Node::new(Arc::clone(&app), NodeConfig::from(&config), app_to_node_tx);
    tokio::spawn(node.run(app_to_node_rx));
    app.lock().await.dispatch_to_node(NodeCmdEvent::Start);

    let mut tui = Tui::start()?;

    loop {
        tui.draw(&mut *app.lock().await)?;

        // Do not hold the lock while waiting, the node task needs it
        let event = tui.events.next().await;
        let result = {
            let mut app = app.lock().await;
            match event {
                Event::Input(key_event) => app.process_key_event(key_event),
                Event::Click(mouse_event) => app.process_click(mouse_event),
                Event::Resize => AppReturn::Continue,
                Event::Tick => app.update_on_tick(),
            }
        };

        match result {
            AppReturn::Exit => break,
            AppReturn::Sending(pending) => {
                spawn_send(Arc::clone(&app), pending);
            }
            AppReturn::Continue => {}
        }
    }

    app.lock().await.dispatch_to_node(NodeCmdEvent::Stop);
    tui.stop()?;
    info!("Bye");
    Ok(())
}
