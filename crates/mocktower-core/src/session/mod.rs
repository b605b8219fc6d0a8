//! Authentication context.
//!
//! The original console kept the authenticated flag in process-global state;
//! here it is an explicit context object passed by reference, so the logout
//! flow's single write is visible at the call site.

/// Mutable authentication state for the running console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    authenticated: bool,
}

impl AuthContext {
    /// Create a context for an authenticated operator.
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        tracing::info!(
            event = "core.session.auth_state_changed",
            authenticated = authenticated
        );
        self.authenticated = authenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::authenticated()
    }
}
