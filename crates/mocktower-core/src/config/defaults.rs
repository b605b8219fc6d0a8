//! Default implementations for configuration types.

use super::types::ConsoleConfig;

/// Returns the default API base URL.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Returns the default login route.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_login_route() -> String {
    "/web/login".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            login_route: default_login_route(),
        }
    }
}
