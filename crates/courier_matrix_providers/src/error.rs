use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixProviderError {
    #[error("GOOGLE_MAPS_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Service returned status {status}: {message}")]
    Service { status: String, message: String },

    #[error("No travel time from '{origin}' to '{destination}' (status {status})")]
    ElementNotFound {
        origin: String,
        destination: String,
        status: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Expected {expected} travel times per row and column, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },
}
