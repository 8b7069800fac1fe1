//! Bot configuration: BaseConfig (Telegram + log) + PlacesConfig (search provider). Loaded from env.

mod base;
mod bot_config;
mod places;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use places::PlacesConfig;
