//! Bot abstraction for outbound chat operations.
//!
//! [`Bot`] is transport-agnostic; placebot-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::{PlacebotError, Result};
use crate::types::{Chat, OutgoingMessage};
use async_trait::async_trait;

/// Outbound operations used by the conversation: send (with optional keyboard / parse mode),
/// answer a callback query, delete a message.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message to the given chat and returns the new message id (transport-specific string).
    async fn send(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String>;

    /// Acknowledges an inline-button press so the client stops showing the loading state.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;

    /// Deletes a previously sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by delete.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| PlacebotError::Bot(format!("Invalid message_id: {}", s)))
}
