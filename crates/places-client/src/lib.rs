//! # places-client
//!
//! Nearby-search client for the Google Places API.
//!
//! [`PlacesClient`] is the seam the bot depends on; [`GooglePlacesClient`] implements it with a single
//! HTTP GET to the nearby-search JSON endpoint.
//!
//! ```rust,no_run
//! use places_client::{GooglePlacesClient, LatLng, PlacesClient};
//!
//! async fn example() -> Result<(), places_client::QueryError> {
//!     let client = GooglePlacesClient::new("your-api-key".to_string());
//!     let places = client
//!         .search_nearby(LatLng { lat: 41.3111, lng: 69.2797 }, "restaurant", 2000)
//!         .await?;
//!     println!("found {}", places.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{mask_token, GooglePlacesClient, PlacesClient, DEFAULT_NEARBY_SEARCH_URL};
pub use error::QueryError;
pub use types::{DayTime, Geometry, LatLng, NearbySearchResponse, OpeningHours, Period, Place};
