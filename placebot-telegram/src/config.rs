//! Minimal Telegram config: token and optional API URL. Loaded from env: BOT_TOKEN (or TELEGRAM_BOT_TOKEN),
//! TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides the env token when provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN (or TELEGRAM_BOT_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; API URL None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks the token is non-empty and the API URL, if set, parses.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid Telegram API URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
