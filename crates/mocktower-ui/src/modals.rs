//! Modal workflow contract.
//!
//! The dialog bodies live outside this crate. Each one receives the project
//! id and the current selection, performs its mutating server call, and
//! reports the outcome; [`ProjectView::dispatch`](crate::state::ProjectView::dispatch)
//! supplies the refresh-on-success behavior.

use mocktower_core::projects::SelectionEntry;

/// The six workflows reachable from the project detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// Change the status of the selected applications.
    UpdateStatus,
    /// Change the forwarded endpoint of the selected applications.
    UpdateEndpoint,
    /// Delete the selected applications.
    DeleteApplications,
    /// Update the project's metadata.
    UpdateProject,
    /// Delete the project itself.
    DeleteProject,
    /// Create a new application under the project.
    CreateApplication,
}

impl WorkflowKind {
    /// Whether the workflow operates on the row selection.
    ///
    /// Selection-scoped workflows have their buttons disabled while the
    /// selection is empty; project-scoped workflows are always available.
    pub fn requires_selection(&self) -> bool {
        match self {
            WorkflowKind::UpdateStatus
            | WorkflowKind::UpdateEndpoint
            | WorkflowKind::DeleteApplications => true,

            WorkflowKind::UpdateProject
            | WorkflowKind::DeleteProject
            | WorkflowKind::CreateApplication => false,
        }
    }
}

/// Modal dialog collaborator.
pub trait ModalWorkflow {
    fn kind(&self) -> WorkflowKind;

    /// Perform the mutating server call.
    ///
    /// `selection` is the current selection at dispatch time; project-scoped
    /// workflows may ignore it. Errors are user-facing messages; the dialog
    /// owns its own error surface.
    fn run(&self, project_id: &str, selection: &[SelectionEntry]) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ProjectView, SelectMode};
    use mocktower_core::api::{ApiClient, ApiError};
    use mocktower_core::errors::MocktowerError;
    use mocktower_core::notify::Notifier;
    use mocktower_core::projects::{Application, ApplicationStatus};
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_selection_scoped_workflows() {
        assert!(WorkflowKind::UpdateStatus.requires_selection());
        assert!(WorkflowKind::UpdateEndpoint.requires_selection());
        assert!(WorkflowKind::DeleteApplications.requires_selection());

        assert!(!WorkflowKind::UpdateProject.requires_selection());
        assert!(!WorkflowKind::DeleteProject.requires_selection());
        assert!(!WorkflowKind::CreateApplication.requires_selection());
    }

    struct CountingClient {
        calls: Cell<usize>,
        body: Vec<u8>,
    }

    impl ApiClient for CountingClient {
        fn get(&self, _path: &str) -> Result<Vec<u8>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.body.clone())
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn report(&self, _error: &dyn MocktowerError) {}
    }

    struct RecordingWorkflow {
        kind: WorkflowKind,
        outcome: Result<(), String>,
        seen_selection: RefCell<Option<Vec<SelectionEntry>>>,
    }

    impl ModalWorkflow for RecordingWorkflow {
        fn kind(&self) -> WorkflowKind {
            self.kind
        }

        fn run(&self, _project_id: &str, selection: &[SelectionEntry]) -> Result<(), String> {
            *self.seen_selection.borrow_mut() = Some(selection.to_vec());
            self.outcome.clone()
        }
    }

    fn make_application(id: &str, name: &str) -> Application {
        Application {
            id: id.to_string(),
            name: name.to_string(),
            status: ApplicationStatus::Mocked,
        }
    }

    fn project_body() -> Vec<u8> {
        br#"{"id":"p1","name":"Petstore","applications":[]}"#.to_vec()
    }

    #[test]
    fn test_dispatch_success_triggers_refresh_without_clearing_selection() {
        let client = CountingClient {
            calls: Cell::new(0),
            body: project_body(),
        };
        let mut view = ProjectView::detached("p1");
        view.on_row_select(&make_application("1", "a"), SelectMode::Select);

        let workflow = RecordingWorkflow {
            kind: WorkflowKind::DeleteApplications,
            outcome: Ok(()),
            seen_selection: RefCell::new(None),
        };

        view.dispatch(&workflow, &client, &SilentNotifier);

        // Workflow saw the selection; success re-fetched; selection stayed
        assert_eq!(
            workflow.seen_selection.borrow().as_deref().unwrap().len(),
            1
        );
        assert_eq!(client.calls.get(), 1);
        assert_eq!(view.selection().len(), 1);
    }

    #[test]
    fn test_dispatch_failure_skips_refresh() {
        let client = CountingClient {
            calls: Cell::new(0),
            body: project_body(),
        };
        let mut view = ProjectView::detached("p1");
        view.on_row_select(&make_application("1", "a"), SelectMode::Select);

        let workflow = RecordingWorkflow {
            kind: WorkflowKind::UpdateStatus,
            outcome: Err("server rejected the status".to_string()),
            seen_selection: RefCell::new(None),
        };

        view.dispatch(&workflow, &client, &SilentNotifier);

        assert_eq!(client.calls.get(), 0);
    }

    #[test]
    fn test_selection_scoped_dispatch_is_inert_on_empty_selection() {
        let client = CountingClient {
            calls: Cell::new(0),
            body: project_body(),
        };
        let mut view = ProjectView::detached("p1");

        let workflow = RecordingWorkflow {
            kind: WorkflowKind::DeleteApplications,
            outcome: Ok(()),
            seen_selection: RefCell::new(None),
        };

        view.dispatch(&workflow, &client, &SilentNotifier);

        assert!(workflow.seen_selection.borrow().is_none());
        assert_eq!(client.calls.get(), 0);
    }

    #[test]
    fn test_project_scoped_dispatch_runs_without_selection() {
        let client = CountingClient {
            calls: Cell::new(0),
            body: project_body(),
        };
        let mut view = ProjectView::detached("p1");

        let workflow = RecordingWorkflow {
            kind: WorkflowKind::CreateApplication,
            outcome: Ok(()),
            seen_selection: RefCell::new(None),
        };

        view.dispatch(&workflow, &client, &SilentNotifier);

        assert!(workflow.seen_selection.borrow().is_some());
        assert_eq!(client.calls.get(), 1);
    }
}
