// app/sender.rs

//! Send callback injected into the message input.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Reasons a message could not be handed to the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("no light push peers available")]
    NoLightPushPeers,
    #[error("node is not running")]
    NodeNotRunning,
    #[error("node dropped the request before answering")]
    ReplyDropped,
}

/// Future returned by a send callback.
pub type SendFuture = Pin<Box<dyn Future<Output = Result<(), SendError>> + Send>>;

/// Shared asynchronous send callback, `(text) -> future`.
pub type SendFn = Arc<dyn Fn(String) -> SendFuture + Send + Sync>;

/// The send callback supplied by the owner of the input.
/// It is `Absent` while the network is not ready.
#[derive(Clone, Default)]
pub enum MessageSender {
    #[default]
    Absent,
    Present(SendFn),
}

impl MessageSender {
    /// Wraps an async closure into a present sender.
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SendError>> + Send + 'static,
    {
        MessageSender::Present(Arc::new(move |text| -> SendFuture { Box::pin(f(text)) }))
    }

    pub fn is_present(&self) -> bool {
        matches!(self, MessageSender::Present(_))
    }

    /// Calls the callback with `text`, if there is one.
    pub(crate) fn send(&self, text: String) -> Option<SendFuture> {
        match self {
            MessageSender::Absent => None,
            MessageSender::Present(send_fn) => Some(send_fn(text)),
        }
    }
}

impl fmt::Debug for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSender::Absent => write!(f, "Absent"),
            MessageSender::Present(_) => write!(f, "Present(..)"),
        }
    }
}
