//! Shared error-reporting seam.
//!
//! Every failed read (project fetch, export) is handed to one [`Notifier`],
//! which turns it into a user-visible notification. Failures never propagate
//! past the action that produced them and are never retried.

use crate::errors::MocktowerError;

/// Error-reporting collaborator.
pub trait Notifier {
    fn report(&self, error: &dyn MocktowerError);
}

/// [`Notifier`] that emits the notification through `tracing`.
///
/// Default collaborator for embeddings without their own notification
/// surface (tests, headless tooling).
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report(&self, error: &dyn MocktowerError) {
        if error.is_user_error() {
            tracing::warn!(
                event = "core.notify.request_failed",
                code = error.error_code(),
                error = %error
            );
        } else {
            tracing::error!(
                event = "core.notify.request_failed",
                code = error.error_code(),
                error = %error
            );
        }
    }
}
