//! Side effects requested by a transition.

use placebot_core::{Location, OutgoingMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send a message to the user's chat.
    Send(OutgoingMessage),
    /// Send the search results. If delivery fails the search counts as failed and the remaining
    /// actions of the turn are dropped.
    SendResults(OutgoingMessage),
    /// Acknowledge the inline-button press.
    AnswerCallback { callback_id: String },
    /// Remove a message (the category menu once a choice is made).
    DeleteMessage { message_id: String },
    /// Run the nearby search; its outcome comes back as `SearchCompleted` / `SearchFailed`.
    Search { location: Location, type_code: String },
}
