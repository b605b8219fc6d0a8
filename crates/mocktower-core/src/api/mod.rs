//! HTTP client seam and server route builders.
//!
//! The console never speaks HTTP directly; it issues relative-path GET
//! requests through the [`ApiClient`] trait and lets the embedding
//! application supply the transport.

pub mod errors;
pub mod routes;
pub mod traits;

pub use errors::ApiError;
pub use traits::ApiClient;
