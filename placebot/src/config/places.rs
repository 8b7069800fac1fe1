//! Places search config: API key, endpoint, radius and result limit.

use anyhow::{Context, Result};
use places_client::{mask_token, DEFAULT_NEARBY_SEARCH_URL};
use std::env;
use std::str::FromStr;

use crate::formatter::DEFAULT_RESULT_LIMIT;
use crate::handlers::DEFAULT_RADIUS_METERS;

/// Upper bound for PLACES_RESULT_LIMIT; the provider returns at most 20 results per page.
pub const MAX_RESULT_LIMIT: usize = 20;

#[derive(Clone)]
pub struct PlacesConfig {
    /// GOOGLE_MAPS_API_KEY
    pub api_key: String,
    /// PLACES_API_URL
    pub api_url: String,
    /// SEARCH_RADIUS_METERS
    pub radius_meters: u32,
    /// PLACES_RESULT_LIMIT
    pub result_limit: usize,
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &mask_token(&self.api_key))
            .field("api_url", &self.api_url)
            .field("radius_meters", &self.radius_meters)
            .field("result_limit", &self.result_limit)
            .finish()
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid number: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl PlacesConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY").context("GOOGLE_MAPS_API_KEY not set")?;
        let api_url =
            env::var("PLACES_API_URL").unwrap_or_else(|_| DEFAULT_NEARBY_SEARCH_URL.to_string());
        let radius_meters = parse_var("SEARCH_RADIUS_METERS", DEFAULT_RADIUS_METERS)?;
        let result_limit = parse_var("PLACES_RESULT_LIMIT", DEFAULT_RESULT_LIMIT)?;
        Ok(Self {
            api_key,
            api_url,
            radius_meters,
            result_limit,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("GOOGLE_MAPS_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("PLACES_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.radius_meters == 0 {
            anyhow::bail!("SEARCH_RADIUS_METERS must be greater than 0");
        }
        if !(1..=MAX_RESULT_LIMIT).contains(&self.result_limit) {
            anyhow::bail!(
                "PLACES_RESULT_LIMIT must be between 1 and {}, got {}",
                MAX_RESULT_LIMIT,
                self.result_limit
            );
        }
        Ok(())
    }
}
