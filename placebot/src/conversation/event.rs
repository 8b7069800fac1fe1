//! Conversation events, derived from inbound messages or produced by the search step.

use places_client::Place;
use placebot_core::{Location, Message, MessageKind};

use super::texts::MENU_COMMAND;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `/start` command.
    Start,
    /// Menu-reopen text command.
    OpenMenu,
    /// Inline category button pressed.
    CategorySelected {
        callback_id: String,
        payload: String,
        menu_message_id: Option<String>,
    },
    /// Location shared.
    LocationShared(Location),
    /// Search returned (possibly empty) results.
    SearchCompleted { places: Vec<Place> },
    /// Search failed; `error` is for logs only.
    SearchFailed { error: String },
}

fn is_start_command(text: &str) -> bool {
    let command = text.split_whitespace().next().unwrap_or("");
    command == "/start" || command.starts_with("/start@")
}

impl Event {
    /// Maps an inbound message to an event; `None` for messages the conversation ignores.
    pub fn from_message(message: &Message) -> Option<Self> {
        match &message.kind {
            MessageKind::Text(text) if is_start_command(text) => Some(Event::Start),
            MessageKind::Text(text) if text == MENU_COMMAND => Some(Event::OpenMenu),
            MessageKind::Text(_) | MessageKind::Unsupported => None,
            MessageKind::Callback {
                callback_id,
                data,
                origin_message_id,
            } => Some(Event::CategorySelected {
                callback_id: callback_id.clone(),
                payload: data.clone(),
                menu_message_id: origin_message_id.clone(),
            }),
            MessageKind::Location(location) => Some(Event::LocationShared(*location)),
        }
    }

    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::OpenMenu => "open_menu",
            Event::CategorySelected { .. } => "category_selected",
            Event::LocationShared(_) => "location_shared",
            Event::SearchCompleted { .. } => "search_completed",
            Event::SearchFailed { .. } => "search_failed",
        }
    }
}
