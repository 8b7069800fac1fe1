use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::error::QueryError;
use crate::types::{LatLng, NearbySearchResponse, Place};

/// Google Places nearby-search JSON endpoint.
pub const DEFAULT_NEARBY_SEARCH_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Nearby venue search. Implementations return places in provider order.
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Finds places of `type_code` within `radius_meters` of `location`.
    /// An empty list is a valid outcome; transport or provider failures are [`QueryError`].
    async fn search_nearby(
        &self,
        location: LatLng,
        type_code: &str,
        radius_meters: u32,
    ) -> Result<Vec<Place>, QueryError>;
}

/// Masks an API key for logging: first 7 chars + `***` + last 4 chars. Keys of length ≤ 11 become `***`.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        return "***".to_string();
    }
    match (token.get(..7), token.get(len - 4..)) {
        (Some(head), Some(tail)) => format!("{}***{}", head, tail),
        _ => "***".to_string(),
    }
}

/// [`PlacesClient`] backed by the Google Places API.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    /// Creates a client for the public Google endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_NEARBY_SEARCH_URL.to_string())
    }

    /// Creates a client for a custom endpoint (proxy or test server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn search_nearby(
        &self,
        location: LatLng,
        type_code: &str,
        radius_meters: u32,
    ) -> Result<Vec<Place>, QueryError> {
        let location_param = format!("{},{}", location.lat, location.lng);
        info!(
            location = %location_param,
            radius = radius_meters,
            place_type = %type_code,
            api_key = %mask_token(&self.api_key),
            "step: places nearby search request"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("location", location_param.as_str()),
                ("radius", radius_meters.to_string().as_str()),
                ("type", type_code),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Places API returned non-success status");
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NearbySearchResponse = serde_json::from_str(&body)?;
        match parsed.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => {}
            Some(other) => {
                warn!(api_status = %other, "Places API rejected the request");
                return Err(QueryError::Api {
                    status: other.to_string(),
                    message: parsed.error_message.unwrap_or_default(),
                });
            }
        }

        info!(
            result_count = parsed.results.len(),
            "step: places nearby search done"
        );
        Ok(parsed.results)
    }
}
