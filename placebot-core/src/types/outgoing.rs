//! Outbound message: text plus optional keyboard and parse mode.

use serde::{Deserialize, Serialize};

use super::markup::ReplyMarkup;

/// Text formatting applied by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Legacy Telegram Markdown (`*bold*`, `[text](url)`).
    Markdown,
}

/// A message to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
    pub parse_mode: Option<ParseMode>,
}

impl OutgoingMessage {
    /// Plain text, no keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
            parse_mode: None,
        }
    }

    /// Attaches a keyboard.
    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = Some(markup);
        self
    }

    /// Sets the parse mode.
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}
