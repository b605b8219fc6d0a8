//! Configuration type definitions for the console.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration loaded from `~/.mocktower/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL the [`ApiClient`](crate::api::ApiClient) implementation joins
    /// relative request paths onto.
    #[serde(default = "defaults::default_api_base_url")]
    pub api_base_url: String,

    /// Route the logout flow redirects to.
    #[serde(default = "defaults::default_login_route")]
    pub login_route: String,
}
