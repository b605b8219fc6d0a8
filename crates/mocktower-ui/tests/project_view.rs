//! End-to-end exercise of the project detail view against scripted
//! collaborators: mount, selection, a deleting workflow with its refresh,
//! export, and logout.

use std::cell::RefCell;

use mocktower_core::ConsoleConfig;
use mocktower_core::api::{ApiClient, ApiError};
use mocktower_core::errors::MocktowerError;
use mocktower_core::files::{FileSaver, SaveError};
use mocktower_core::notify::Notifier;
use mocktower_core::projects::{Application, ApplicationStatus, SelectionEntry};
use mocktower_core::session::AuthContext;
use mocktower_ui::actions;
use mocktower_ui::modals::{ModalWorkflow, WorkflowKind};
use mocktower_ui::state::{ProjectView, SelectMode};

/// Scripted server: a mutable project payload plus a request log.
struct ScriptedServer {
    project_body: RefCell<Vec<u8>>,
    export_body: Vec<u8>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedServer {
    fn new(project_body: Vec<u8>) -> Self {
        Self {
            project_body: RefCell::new(project_body),
            export_body: b"<restProject/>".to_vec(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn set_project_body(&self, body: Vec<u8>) {
        *self.project_body.borrow_mut() = body;
    }
}

impl ApiClient for ScriptedServer {
    fn get(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.requests.borrow_mut().push(path.to_string());
        if path.ends_with("/export") {
            Ok(self.export_body.clone())
        } else if path == "/api/rest/core/logout/" {
            Ok(Vec::new())
        } else {
            Ok(self.project_body.borrow().clone())
        }
    }
}

struct CollectingNotifier {
    codes: RefCell<Vec<&'static str>>,
}

impl Notifier for CollectingNotifier {
    fn report(&self, error: &dyn MocktowerError) {
        self.codes.borrow_mut().push(error.error_code());
    }
}

struct MemorySaver {
    files: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FileSaver for MemorySaver {
    fn save(&self, filename: &str, payload: &[u8]) -> Result<(), SaveError> {
        self.files
            .borrow_mut()
            .push((filename.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Delete-applications dialog stand-in: tells the scripted server to drop
/// the selected ids from subsequent project reads.
struct DeleteApplicationsDialog<'a> {
    server: &'a ScriptedServer,
    remaining_body: Vec<u8>,
}

impl ModalWorkflow for DeleteApplicationsDialog<'_> {
    fn kind(&self) -> WorkflowKind {
        WorkflowKind::DeleteApplications
    }

    fn run(&self, _project_id: &str, selection: &[SelectionEntry]) -> Result<(), String> {
        assert!(!selection.is_empty());
        self.server.set_project_body(self.remaining_body.clone());
        Ok(())
    }
}

fn two_application_body() -> Vec<u8> {
    br#"{
        "id": "p1",
        "name": "Petstore",
        "description": "Mocked petstore API",
        "applications": [
            {"id": "a1", "name": "orders", "status": "MOCKED"},
            {"id": "a2", "name": "inventory", "status": "FORWARDED"}
        ],
        "statusCount": {"MOCKED": 1, "FORWARDED": 1}
    }"#
    .to_vec()
}

fn one_application_body() -> Vec<u8> {
    br#"{
        "id": "p1",
        "name": "Petstore",
        "description": "Mocked petstore API",
        "applications": [
            {"id": "a2", "name": "inventory", "status": "FORWARDED"}
        ],
        "statusCount": {"FORWARDED": 1}
    }"#
    .to_vec()
}

fn application(id: &str, name: &str) -> Application {
    Application {
        id: id.to_string(),
        name: name.to_string(),
        status: ApplicationStatus::Mocked,
    }
}

#[test]
fn delete_workflow_refreshes_but_selection_stays_stale() {
    let server = ScriptedServer::new(two_application_body());
    let notifier = CollectingNotifier {
        codes: RefCell::new(Vec::new()),
    };

    let mut view = ProjectView::mount("p1", &server, &notifier);
    assert_eq!(view.project().applications.len(), 2);
    assert_eq!(view.project().status_count.mocked, 1);

    view.on_row_select(&application("a1", "orders"), SelectMode::Select);
    assert!(view.can_dispatch());

    let dialog = DeleteApplicationsDialog {
        server: &server,
        remaining_body: one_application_body(),
    };
    view.dispatch(&dialog, &server, &notifier);

    // The refresh replaced the aggregate wholesale...
    assert_eq!(view.project().applications.len(), 1);
    assert_eq!(view.project().applications[0].id, "a2");
    // ...but the selection still references the deleted id until the
    // operator next interacts with it.
    assert_eq!(view.selection().len(), 1);
    assert_eq!(view.selection()[0].id, "a1");

    // Select-all resynchronizes the selection with what actually exists.
    view.on_select_all(SelectMode::Select);
    assert_eq!(view.selection().len(), 1);
    assert_eq!(view.selection()[0].id, "a2");

    assert!(notifier.codes.borrow().is_empty());
    // mount fetch + post-workflow refresh
    assert_eq!(
        server
            .requests
            .borrow()
            .iter()
            .filter(|p| p.as_str() == "/api/rest/rest/project/p1")
            .count(),
        2
    );
}

#[test]
fn export_saves_payload_under_project_filename() {
    let server = ScriptedServer::new(two_application_body());
    let notifier = CollectingNotifier {
        codes: RefCell::new(Vec::new()),
    };
    let saver = MemorySaver {
        files: RefCell::new(Vec::new()),
    };

    let view = ProjectView::mount("p1", &server, &notifier);
    view.export(&server, &saver, &notifier);

    assert_eq!(
        *saver.files.borrow(),
        vec![("p1.xml".to_string(), b"<restProject/>".to_vec())]
    );
    assert!(notifier.codes.borrow().is_empty());
}

#[test]
fn logout_redirects_and_clears_auth() {
    let server = ScriptedServer::new(two_application_body());
    let mut auth = AuthContext::authenticated();

    let redirect = actions::logout(&server, &mut auth, &ConsoleConfig::default());

    assert_eq!(redirect.route, "/web/login");
    assert!(!auth.is_authenticated());
    assert!(server
        .requests
        .borrow()
        .contains(&"/api/rest/core/logout/".to_string()));
}
