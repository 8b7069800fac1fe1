//! # Nearby places bot
//!
//! The user picks a category from an inline menu, shares a location, and gets up to ten nearby venues
//! from the Google Places API. Wires the category catalog, per-user session store, the conversation
//! state machine, the response formatter, and the handler chain; loads config from env and runs the dispatcher.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod formatter;
pub mod handlers;
pub mod runner;
pub mod session;

pub use catalog::{Catalog, Category};
pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, PlacesConfig};
pub use conversation::{recover, transition, Action, ConvContext, ConvState, Event, TransitionResult};
pub use handlers::{ConversationHandler, LoggingHandler};
pub use runner::{build_handler_chain, run_bot};
pub use session::{Session, SessionStore};
