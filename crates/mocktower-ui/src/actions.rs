//! Business logic handlers for the console views.
//!
//! This module contains the functions that talk to the API seam on behalf of
//! the views: fetching the project aggregate, exporting a project, and the
//! logout flow.

use mocktower_core::ConsoleConfig;
use mocktower_core::api::{ApiClient, ApiError, routes};
use mocktower_core::errors::MocktowerError;
use mocktower_core::files::{FileSaver, SaveError};
use mocktower_core::projects::Project;
use mocktower_core::session::AuthContext;

use crate::logout::{Redirect, SessionTerminator};

/// Failure of the export flow: either the read or the file save.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

impl MocktowerError for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            ExportError::Api(e) => e.error_code(),
            ExportError::Save(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ExportError::Api(e) => e.is_user_error(),
            ExportError::Save(e) => e.is_user_error(),
        }
    }
}

/// Fetch one project aggregate.
///
/// A pure read: the caller decides what to do with the result. Failures are
/// not retried.
pub fn fetch_project(client: &dyn ApiClient, project_id: &str) -> Result<Project, ApiError> {
    tracing::info!(event = "ui.fetch_project.started", project_id = project_id);

    let result = client
        .get(&routes::project(project_id))
        .and_then(|body| serde_json::from_slice::<Project>(&body).map_err(ApiError::from));

    match &result {
        Ok(project) => {
            tracing::info!(
                event = "ui.fetch_project.completed",
                project_id = project_id,
                application_count = project.applications.len()
            );
        }
        Err(e) => {
            tracing::error!(
                event = "ui.fetch_project.failed",
                project_id = project_id,
                error = %e
            );
        }
    }

    result
}

/// Export one project and save the payload as `{projectId}.xml`.
///
/// A pure side-effecting read: no view state is touched on either outcome.
pub fn export_project(
    client: &dyn ApiClient,
    saver: &dyn FileSaver,
    project_id: &str,
) -> Result<(), ExportError> {
    tracing::info!(event = "ui.export_project.started", project_id = project_id);

    let payload = client.get(&routes::project_export(project_id))?;
    let filename = format!("{project_id}.xml");
    saver.save(&filename, &payload)?;

    tracing::info!(
        event = "ui.export_project.completed",
        project_id = project_id,
        filename = filename,
        payload_len = payload.len()
    );
    Ok(())
}

/// Run the logout flow and return the redirect directive.
///
/// The redirect exists before the request outcome is known; a failed logout
/// request is swallowed, since the only consequence is a possibly-still-valid
/// server session.
pub fn logout(
    client: &dyn ApiClient,
    auth: &mut AuthContext,
    config: &ConsoleConfig,
) -> Redirect {
    let (mut terminator, redirect) = SessionTerminator::start(&config.login_route);
    let result = client.get(routes::logout());
    terminator.complete(result.map(|_| ()), auth);
    redirect
}
