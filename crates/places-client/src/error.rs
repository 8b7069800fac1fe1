use thiserror::Error;

/// Failure of a nearby-search call. Empty results are not an error.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Places request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Places API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Places API status {status}: {message}")]
    Api { status: String, message: String },

    #[error("Invalid Places response: {0}")]
    Decode(#[from] serde_json::Error),
}
