use super::errors::ApiError;

/// HTTP transport seam.
///
/// Implementations perform a GET against the given relative path and return
/// the raw response body. Non-2xx responses and transport failures surface
/// as [`ApiError`]; callers decide whether to decode the body as JSON or
/// treat it as a binary payload.
///
/// Calls are blocking from the caller's perspective; the embedding
/// application is responsible for running them off any latency-sensitive
/// loop. No timeout is enforced here.
pub trait ApiClient {
    fn get(&self, path: &str) -> Result<Vec<u8>, ApiError>;
}
