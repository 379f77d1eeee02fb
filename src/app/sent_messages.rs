// app/sent_messages.rs

//! Messages acknowledged by the node, most recent last.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

pub const MAX_SENT_MESSAGES: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentMessage {
    pub timestamp: DateTime<Local>,
    pub nick: String,
    pub text: String,
}

impl SentMessage {
    pub fn new(nick: &str, text: &str) -> Self {
        Self {
            timestamp: Local::now(),
            nick: nick.to_string(),
            text: text.to_string(),
        }
    }
}

/// Bounded history of sent messages. Oldest entries are dropped first.
#[derive(Debug)]
pub struct SentMessages {
    messages: VecDeque<SentMessage>,
    capacity: usize,
}

impl Default for SentMessages {
    fn default() -> Self {
        Self::with_capacity(MAX_SENT_MESSAGES)
    }
}

impl SentMessages {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: SentMessage) {
        if self.capacity == 0 {
            return;
        }
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SentMessage> {
        self.messages.iter()
    }
}
