use crate::errors::MocktowerError;

/// Note: This type intentionally does not implement `Clone` because
/// `serde_json::Error` (in `Decode`) is not `Clone`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Server responded with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Malformed response body: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}

impl MocktowerError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "API_TRANSPORT_FAILED",
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::Decode { .. } => "API_DECODE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ApiError::Transport { .. } | ApiError::Status { .. } | ApiError::Decode { .. } => false,
        }
    }
}
