// app/mod.rs

//! Controller used to handle user input and interaction with the node task.

pub mod actions;
pub mod callbacks;
pub mod message_input;
pub mod sender;
pub mod sent_messages;
pub mod state;

use self::actions::Action;
use self::sender::{MessageSender, SendError, SendFuture};
use self::state::AppState;
use crate::inputs::key::Key;
use crate::node::app_handler::NodeCmdEvent;

use crossterm::event::{KeyEvent, MouseEvent};
use log::*;
use ratatui::layout::Position;
use std::sync::Arc;
use tokio::sync::{mpsc::UnboundedSender, oneshot, Mutex};
use tokio::task::JoinHandle;

/// Return status indicating what the main loop should do next.
pub enum AppReturn {
    Exit,
    Continue,
    /// A message is on its way; the future must be awaited without the app lock.
    Sending(SendFuture),
}

/// `App` contains the state of the application and a tx channel to the node task.
pub struct App<'a> {
    app_to_node_tx: UnboundedSender<NodeCmdEvent>,
    pub state: AppState<'a>,
}

impl App<'_> {
    /// Returns an app with default state and the given channel to the node task.
    ///
    /// # Arguments
    ///
    /// * `app_to_node_tx` - An unbounded channel used to send commands to the node task
    /// * `nick` - Name shown next to sent messages
    /// * `content_topic` - Topic the messages are published on
    pub fn new(
        app_to_node_tx: UnboundedSender<NodeCmdEvent>,
        nick: &str,
        content_topic: &str,
    ) -> Self {
        Self {
            app_to_node_tx,
            state: AppState::new(nick, content_topic),
        }
    }

    /// Process a key event as a global action, or pass it to the message input.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> AppReturn {
        trace!("Keyevent: {:?}", key_event);
        match self.state.actions.find(Key::from(key_event)) {
            Some(Action::Quit) => return AppReturn::Exit,
            Some(Action::ToggleHelp) => self.state.show_help = !self.state.show_help,
            Some(Action::ToggleLogs) => self.state.show_logs = !self.state.show_logs,
            Some(Action::TogglePeers) => self.dispatch_to_node(NodeCmdEvent::TogglePeers),
            // Enter is filtered by the input itself, modifiers included
            Some(Action::SendMessage) | None => {
                if let Some(pending) = self.state.message_input.on_key_down(key_event) {
                    return AppReturn::Sending(pending);
                }
            }
        }
        AppReturn::Continue
    }

    /// Process a left click, which only matters on the send button.
    pub fn process_click(&mut self, mouse_event: MouseEvent) -> AppReturn {
        let position = Position::new(mouse_event.column, mouse_event.row);
        if !self.state.send_button_area.contains(position) {
            return AppReturn::Continue;
        }
        trace!("Send button clicked at {:?}", position);
        match self.state.message_input.on_button_click() {
            Some(pending) => AppReturn::Sending(pending),
            None => AppReturn::Continue,
        }
    }

    /// We could update the app or dispatch event on tick
    pub fn update_on_tick(&mut self) -> AppReturn {
        AppReturn::Continue
    }

    /// Send a command to the node task
    /// Does not block
    pub fn dispatch_to_node(&self, cmd: NodeCmdEvent) {
        if let Err(e) = self.app_to_node_tx.send(cmd) {
            error!("Error from dispatch {}", e);
        };
    }

    /// Builds the send callback handed to the message input while the node runs.
    /// Each call pushes the text to the node and waits for its answer.
    fn light_push_sender(&self) -> MessageSender {
        let tx = self.app_to_node_tx.clone();
        MessageSender::from_fn(move |text: String| {
            let tx = tx.clone();
            async move {
                let (reply_tx, reply_rx) = oneshot::channel();
                tx.send(NodeCmdEvent::LightPush(text, reply_tx))
                    .map_err(|_| SendError::NodeNotRunning)?;
                reply_rx.await.map_err(|_| SendError::ReplyDropped)?
            }
        })
    }
}

/// Awaits a pending send without holding the app lock,
/// then reports the outcome to the message input.
pub fn spawn_send(app: Arc<Mutex<App<'static>>>, pending: SendFuture) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = pending.await;
        app.lock().await.cb_send_settled(result);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeConfig};
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::layout::Rect;
    use std::time::Duration;
    use tokio::sync::mpsc::unbounded_channel;

    const TOPIC: &str = "/toy-chat/2/huilong/proto";

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> AppReturn {
        app.process_key_event(KeyEvent::new(code, modifiers))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(matches!(
                press(app, KeyCode::Char(c), KeyModifiers::NONE),
                AppReturn::Continue
            ));
        }
    }

    #[test]
    fn global_actions() {
        let (tx, mut rx) = unbounded_channel();
        let mut app = App::new(tx, "me", TOPIC);

        assert!(matches!(
            press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            AppReturn::Exit
        ));

        let show_help = app.state.show_help;
        press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(app.state.show_help, !show_help);

        let show_logs = app.state.show_logs;
        press(&mut app, KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(app.state.show_logs, !show_logs);

        press(&mut app, KeyCode::F(3), KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(NodeCmdEvent::TogglePeers)));
    }

    fn click(app: &mut App, column: u16, row: u16) -> AppReturn {
        app.process_click(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// App with a sender that records texts, and its button at (50..60, 10..13).
    fn clickable_app() -> (App<'static>, Arc<std::sync::Mutex<Vec<String>>>) {
        let (tx, _rx) = unbounded_channel();
        let mut app = App::new(tx, "me", TOPIC);
        let sent = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sent_clone = Arc::clone(&sent);
        app.state
            .message_input
            .set_sender(MessageSender::from_fn(move |text: String| {
                let sent = Arc::clone(&sent_clone);
                async move {
                    sent.lock().unwrap().push(text);
                    Ok(())
                }
            }));
        app.state.send_button_area = Rect::new(50, 10, 10, 3);
        (app, sent)
    }

    #[tokio::test]
    async fn click_on_send_button_sends_once_and_clears() {
        let (mut app, sent) = clickable_app();
        app.state.set_light_push_peers(1);
        type_text(&mut app, "clicked");

        let AppReturn::Sending(pending) = click(&mut app, 55, 11) else {
            panic!("click should trigger a send");
        };
        app.cb_send_settled(pending.await);

        assert_eq!(*sent.lock().unwrap(), vec!["clicked".to_string()]);
        assert_eq!(app.state.message_input.text(), "");
    }

    #[test]
    fn click_on_inactive_send_button_does_nothing() {
        let (mut app, sent) = clickable_app();
        app.state.set_node(Some(crate::node::NodeHandle::new()));
        type_text(&mut app, "hello");
        assert!(!app.state.message_input.is_active());

        assert!(matches!(click(&mut app, 55, 11), AppReturn::Continue));
        assert_eq!(app.state.message_input.text(), "hello");
        assert!(sent.lock().unwrap().is_empty());
    }

    #[test]
    fn click_outside_send_button_does_nothing() {
        let (mut app, sent) = clickable_app();
        app.state.set_light_push_peers(1);
        type_text(&mut app, "hello");

        for (column, row) in [(49, 11), (60, 11), (55, 9), (55, 13), (0, 0)] {
            assert!(matches!(click(&mut app, column, row), AppReturn::Continue));
        }
        assert_eq!(app.state.message_input.text(), "hello");
        assert!(sent.lock().unwrap().is_empty());
    }

    #[test]
    fn other_keys_edit_the_input() {
        let (tx, _rx) = unbounded_channel();
        let mut app = App::new(tx, "me", TOPIC);
        type_text(&mut app, "q is not quit");
        assert_eq!(app.state.message_input.text(), "q is not quit");
    }

    #[test]
    fn enter_before_node_starts_does_not_send() {
        let (tx, mut rx) = unbounded_channel();
        let mut app = App::new(tx, "me", TOPIC);
        type_text(&mut app, "/help");
        assert!(app.state.message_input.is_active());

        assert!(matches!(
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE),
            AppReturn::Continue
        ));
        assert_eq!(app.state.message_input.text(), "/help");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn enter_sends_through_the_node() {
        let (tx, rx) = unbounded_channel();
        let app = Arc::new(Mutex::new(App::new(tx.clone(), "me", TOPIC)));
        let config = NodeConfig {
            nick: "me".to_string(),
            content_topic: TOPIC.to_string(),
            initial_peers: 2,
            peer_discovery_delay: Duration::ZERO,
        };
        let node = Node::new(Arc::clone(&app), config, tx);
        tokio::spawn(node.run(rx));
        app.lock().await.dispatch_to_node(NodeCmdEvent::Start);

        // wait for peer discovery
        for _ in 0..100 {
            if app.lock().await.state.has_light_push_peers() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let result = {
            let mut app = app.lock().await;
            assert!(app.state.node().is_some());
            type_text(&mut app, "hello");
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE)
        };
        let AppReturn::Sending(pending) = result else {
            panic!("enter should trigger a send");
        };
        spawn_send(Arc::clone(&app), pending).await.unwrap();

        let app = app.lock().await;
        assert_eq!(app.state.message_input.text(), "");
        let texts = app
            .state
            .sent_messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["hello"]);
    }

    #[tokio::test]
    async fn failed_send_is_swallowed_and_clears_input() {
        let (tx, rx) = unbounded_channel();
        let app = Arc::new(Mutex::new(App::new(tx.clone(), "me", TOPIC)));
        let config = NodeConfig {
            nick: "me".to_string(),
            content_topic: TOPIC.to_string(),
            initial_peers: 0,
            peer_discovery_delay: Duration::ZERO,
        };
        let node = Node::new(Arc::clone(&app), config, tx);
        tokio::spawn(node.run(rx));
        app.lock().await.dispatch_to_node(NodeCmdEvent::Start);

        for _ in 0..100 {
            if app.lock().await.state.node().is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        // commands activate the button even without peers
        let result = {
            let mut app = app.lock().await;
            type_text(&mut app, "/nick bob");
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE)
        };
        let AppReturn::Sending(pending) = result else {
            panic!("enter should trigger a send");
        };
        spawn_send(Arc::clone(&app), pending).await.unwrap();

        let app = app.lock().await;
        assert_eq!(app.state.message_input.text(), "");
        assert!(app.state.sent_messages.is_empty());
    }
}
