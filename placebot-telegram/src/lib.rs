//! # placebot-telegram
//!
//! Telegram layer: adapters from teloxide updates to core messages, [`placebot_core::Bot`] implementation,
//! minimal config, and the dispatcher runner with graceful shutdown.
//! Handles only Telegram connectivity and handler-chain execution; conversation logic lives in placebot.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_teloxide_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{run_dispatcher, shutdown_signal};
