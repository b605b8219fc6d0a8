//! Project / application domain types.
//!
//! A [`Project`] is the aggregate served by the mock server's read endpoint:
//! project metadata plus the ordered list of applications and their status
//! counts. It is fetched as a single unit and replaced wholesale on every
//! refresh; partial updates are not supported.

pub mod types;

pub use types::{Application, ApplicationStatus, Project, SelectionEntry, StatusCount};
