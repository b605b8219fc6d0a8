//! mocktower-ui: View-state layer for the mocktower admin console.
//!
//! Owns the project detail view's two cooperating pieces of state - the
//! last-fetched project aggregate and the operator's row selection - plus
//! the one-shot logout flow. Rendering, routing, and the modal dialog
//! bodies are external collaborators; this crate supplies their contracts
//! and the state machine behind them.
//!
//! # Main Entry Points
//!
//! - [`state`] - `ProjectStore`, `SelectionTracker`, and the `ProjectView` facade
//! - [`actions`] - fetch / export / logout operations against the API seam
//! - [`modals`] - modal workflow contract and dispatch gating
//! - [`table`] - application table column contract
//! - [`logout`] - the session terminator state machine

pub mod actions;
pub mod liveness;
pub mod logout;
pub mod modals;
pub mod state;
pub mod table;

pub use logout::{Redirect, SessionTerminator, TerminatorState};
pub use modals::{ModalWorkflow, WorkflowKind};
pub use state::{ProjectStore, ProjectView, SelectMode, SelectionTracker};
