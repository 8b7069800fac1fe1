//! Mock implementation of [`placebot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on sent texts, keyboards, callback answers and
//! deletions without hitting Telegram.

use async_trait::async_trait;
use placebot_core::{Bot, Chat, OutgoingMessage, ParseMode, PlacebotError, Result};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // chat ids kept for assertions in some tests only
pub enum BotCall {
    Send { chat_id: i64, message: OutgoingMessage },
    AnswerCallback { callback_id: String },
    Delete { chat_id: i64, message_id: String },
}

/// Mock Bot that records calls and returns increasing message ids from `send`.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicU32,
    fail_delete: bool,
    reject_markdown: bool,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// MockBot whose `delete_message` always fails (message already gone, missing rights, ...).
    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    /// MockBot that refuses Markdown sends the way Telegram refuses unbalanced entities.
    /// Refused messages are not recorded.
    pub fn rejecting_markdown() -> Self {
        Self {
            reject_markdown: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Sent messages in order.
    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Send { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String> {
        if self.reject_markdown && message.parse_mode == Some(ParseMode::Markdown) {
            return Err(PlacebotError::Bot(
                "Bad Request: can't parse entities: Can't find end of the entity".to_string(),
            ));
        }
        self.record(BotCall::Send {
            chat_id: chat.id,
            message: message.clone(),
        });
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(id.to_string())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.record(BotCall::AnswerCallback {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.record(BotCall::Delete {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        if self.fail_delete {
            return Err(PlacebotError::Bot(
                "Bad Request: message to delete not found".to_string(),
            ));
        }
        Ok(())
    }
}
