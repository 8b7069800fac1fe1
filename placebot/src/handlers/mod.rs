//! Chain handlers: inbound logging and the place-search conversation.

mod conversation;
mod logging;

pub use conversation::{ConversationHandler, DEFAULT_RADIUS_METERS};
pub use logging::LoggingHandler;
