//! Inbound message types: the events a transport delivers to the handler chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Geographic point shared by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the user sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Plain text, including commands such as `/start`.
    Text(String),
    /// Inline-button press. `origin_message_id` is the message carrying the keyboard, when known.
    Callback {
        callback_id: String,
        data: String,
        origin_message_id: Option<String>,
    },
    /// Location share.
    Location(Location),
    /// Anything else (stickers, photos, ...); handlers ignore it.
    Unsupported,
}

/// A single inbound event with user, chat and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text content if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Short name of the kind, for log fields.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MessageKind::Text(_) => "text",
            MessageKind::Callback { .. } => "callback",
            MessageKind::Location(_) => "location",
            MessageKind::Unsupported => "unsupported",
        }
    }
}
