//! # placebot-core
//!
//! Core types and traits for the nearby places bot: [`Bot`], [`Handler`], inbound [`Message`] and its
//! [`MessageKind`], outbound [`OutgoingMessage`] with keyboards, errors, and tracing initialization.
//! Transport-agnostic; used by placebot-telegram, handler-chain and the placebot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, PlacebotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InlineButton, Location, Message, MessageKind, OutgoingMessage,
    ParseMode, ReplyButton, ReplyMarkup, ToCoreMessage, ToCoreUser, User,
};
