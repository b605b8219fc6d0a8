//! mocktower-core: Core library for the mocktower admin console
//!
//! This library provides the domain model and collaborator seams used by the
//! console's view-state layer. The HTTP transport, file-save capability, and
//! user-visible notifications are external collaborators reached through the
//! traits defined here.
//!
//! # Main Entry Points
//!
//! - [`projects`] - Project / application domain types
//! - [`api`] - HTTP client seam and server route builders
//! - [`files`] - File-save (browser download) seam
//! - [`notify`] - Shared error-reporting seam
//! - [`session`] - Authentication context
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod errors;
pub mod files;
pub mod logging;
pub mod notify;
pub mod projects;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiClient, ApiError};
pub use config::ConsoleConfig;
pub use files::{FileSaver, SaveError};
pub use notify::{Notifier, TracingNotifier};
pub use projects::{Application, ApplicationStatus, Project, SelectionEntry, StatusCount};
pub use session::AuthContext;

// Re-export logging initialization
pub use logging::init_logging;
