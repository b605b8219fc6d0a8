//! One-shot logout flow.
//!
//! Two independent, order-insensitive effects are issued at construction
//! time: the logout request (with a completion callback) and the redirect
//! directive. The redirect is unconditional - it exists before the request
//! resolves and is not gated on its outcome.

use mocktower_core::api::ApiError;
use mocktower_core::session::AuthContext;

/// Navigation directive handed to the routing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: String,
}

/// State of the logout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminatorState {
    /// Request issued, completion not yet observed.
    Pending,
    /// Completion observed, whatever the outcome.
    Completed,
}

/// One-shot state machine behind the logout view.
#[derive(Debug)]
pub struct SessionTerminator {
    state: TerminatorState,
}

impl SessionTerminator {
    /// Begin the logout flow.
    ///
    /// Returns the terminator in `Pending` together with the redirect to the
    /// login route. Callers issue the logout request themselves and feed the
    /// outcome to [`complete`](Self::complete).
    pub fn start(login_route: &str) -> (Self, Redirect) {
        tracing::info!(event = "ui.logout.started", login_route = login_route);
        (
            Self {
                state: TerminatorState::Pending,
            },
            Redirect {
                route: login_route.to_string(),
            },
        )
    }

    /// Observe the logout request's completion.
    ///
    /// On success the auth context is marked unauthenticated. A failure is
    /// swallowed: the operator was already redirected, and the only
    /// consequence is a possibly-still-valid server session.
    pub fn complete(&mut self, result: Result<(), ApiError>, auth: &mut AuthContext) {
        match result {
            Ok(()) => {
                auth.set_authenticated(false);
                tracing::info!(event = "ui.logout.completed");
            }
            Err(e) => {
                tracing::debug!(event = "ui.logout.request_failed", error = %e);
            }
        }
        self.state = TerminatorState::Completed;
    }

    pub fn state(&self) -> TerminatorState {
        self.state
    }
}
