//! Keyboards attached to outgoing messages.

use serde::{Deserialize, Serialize};

/// Button under a message; pressing it delivers `callback_data` back as a callback event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

/// Button on the custom reply keyboard; optionally asks the client to share its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyButton {
    pub text: String,
    pub request_location: bool,
}

impl ReplyButton {
    /// Button that sends its label as a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_location: false,
        }
    }

    /// Button that shares the user's location.
    pub fn location(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_location: true,
        }
    }
}

/// Keyboard variants supported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyMarkup {
    /// Rows of inline buttons attached to the message.
    InlineKeyboard(Vec<Vec<InlineButton>>),
    /// Custom reply keyboard replacing the client's keyboard.
    ReplyKeyboard {
        rows: Vec<Vec<ReplyButton>>,
        resize: bool,
        one_time: bool,
    },
}
