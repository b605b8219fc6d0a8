//! # Configuration System
//!
//! TOML configuration for the console.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.mocktower/config.toml`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.mocktower/config.toml
//! api_base_url = "http://localhost:8080/castlemock"
//! login_route = "/web/login"
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use loading::ConfigError;
pub use types::ConsoleConfig;

impl ConsoleConfig {
    /// Load configuration from the user config file.
    ///
    /// Never fails: an absent, unreadable, or unparseable file falls back
    /// to defaults with a logged warning. See [`loading::load`].
    pub fn load() -> Self {
        loading::load()
    }
}
