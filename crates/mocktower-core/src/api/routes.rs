//! Server route builders.
//!
//! All paths are relative; the [`ApiClient`](super::ApiClient) implementation
//! joins them onto the configured base URL.

/// Read route for one project aggregate.
pub fn project(project_id: &str) -> String {
    format!("/api/rest/rest/project/{project_id}")
}

/// Export route for one project; the response body is the raw export payload.
pub fn project_export(project_id: &str) -> String {
    format!("/api/rest/core/project/rest/{project_id}/export")
}

/// Logout route; the response body is ignored.
pub fn logout() -> &'static str {
    "/api/rest/core/logout/"
}
