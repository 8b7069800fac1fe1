//! Core types: user, chat, inbound message, outbound message with keyboards, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod markup;
mod message;
mod outgoing;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use markup::{InlineButton, ReplyButton, ReplyMarkup};
pub use message::{Location, Message, MessageKind};
pub use outgoing::{OutgoingMessage, ParseMode};
pub use response::HandlerResponse;
pub use user::User;
