//! BotConfig: BaseConfig + PlacesConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, PlacesConfig};

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub places: PlacesConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let places = PlacesConfig::from_env()?;
        Ok(Self { base, places })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.places.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn places(&self) -> &PlacesConfig {
        &self.places
    }

    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn places_api_key(&self) -> &str {
        &self.places.api_key
    }
    pub fn places_api_url(&self) -> &str {
        &self.places.api_url
    }
    pub fn radius_meters(&self) -> u32 {
        self.places.radius_meters
    }
    pub fn result_limit(&self) -> usize {
        self.places.result_limit
    }
}
