//! View state for the project detail view.
//!
//! Two cooperating pieces of state owned by one [`ProjectView`]:
//!
//! - [`ProjectStore`]: the last-fetched project aggregate. Refreshed by an
//!   explicit fetch, replaced wholesale, never mutated locally.
//! - [`SelectionTracker`]: the operator's row selection. Derived solely from
//!   explicit select/deselect/select-all events; a data refresh never
//!   touches it, so entries may reference applications that no longer exist
//!   until the operator next interacts with selection.

use std::time::Instant;

use mocktower_core::api::{ApiClient, ApiError};
use mocktower_core::files::FileSaver;
use mocktower_core::notify::Notifier;
use mocktower_core::projects::{Application, Project, SelectionEntry};

use crate::actions;
use crate::liveness::{LivenessFlag, LivenessToken};
use crate::modals::ModalWorkflow;

// =============================================================================
// Project Store
// =============================================================================

/// Authoritative copy of one project aggregate with refresh tracking.
///
/// Encapsulates:
/// - `project`: the last successfully fetched aggregate
/// - `load_error`: error from the last fetch attempt
/// - `last_refresh`: timestamp of the last successful fetch
#[derive(Debug)]
pub struct ProjectStore {
    /// Last fetched project (private to enforce wholesale replacement).
    project: Project,
    /// Error from the last fetch attempt, if any.
    load_error: Option<String>,
    /// Timestamp of the last successful fetch.
    last_refresh: Instant,
}

impl ProjectStore {
    /// Create a store in the pre-fetch mount state.
    pub fn new() -> Self {
        Self {
            project: Project::default(),
            load_error: None,
            last_refresh: Instant::now(),
        }
    }

    /// Replace the held project wholesale. No field-level merge.
    pub fn apply(&mut self, project: Project) {
        self.project = project;
        self.load_error = None;
        self.last_refresh = Instant::now();
    }

    /// Record a fetch failure. The previously held project is untouched.
    pub fn set_error(&mut self, message: String) {
        self.load_error = Some(message);
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn applications(&self) -> &[Application] {
        &self.project.applications
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn last_refresh(&self) -> Instant {
        self.last_refresh
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Selection Tracker
// =============================================================================

/// Row selection mode reported by the table toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Select,
    Deselect,
}

/// Insertion-ordered set of selected applications, unique by id.
///
/// Entries are matched by identifier alone; the display name carried in each
/// entry never participates in equality. A deselect whose name string drifted
/// from what was selected (a transient formatter difference in the table
/// toolkit) therefore still removes the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionTracker {
    entries: Vec<SelectionEntry>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one application to the selection.
    ///
    /// A re-select of an already-selected id replaces the entry in place, so
    /// the id never appears twice.
    pub fn select(&mut self, application: &Application) {
        let entry = SelectionEntry::from(application);
        match self.entries.iter().position(|e| e.id == entry.id) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Remove one application from the selection by id, if present.
    pub fn deselect(&mut self, application: &Application) {
        match self.entries.iter().position(|e| e.id == application.id) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => {
                tracing::debug!(
                    event = "ui.selection.deselect_missing",
                    application_id = application.id,
                    "Deselect for an id that is not in the selection"
                );
            }
        }
    }

    /// Replace the selection wholesale with one entry per given application,
    /// preserving their order. Duplicate ids keep the first occurrence.
    pub fn select_all(&mut self, applications: &[Application]) {
        let mut entries: Vec<SelectionEntry> = Vec::with_capacity(applications.len());
        for application in applications {
            if !entries.iter().any(|e| e.id == application.id) {
                entries.push(SelectionEntry::from(application));
            }
        }
        self.entries = entries;
    }

    /// Replace the selection with the empty sequence.
    pub fn deselect_all(&mut self) {
        self.entries.clear();
    }

    /// The current selection, in insertion order.
    pub fn current(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn contains(&self, application_id: &str) -> bool {
        self.entries.iter().any(|e| e.id == application_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Project View
// =============================================================================

/// The project detail view's state facade.
///
/// All fields are private - state mutations go through the methods below.
/// Row events touch only the selection; fetches touch only the store.
pub struct ProjectView {
    project_id: String,
    store: ProjectStore,
    selection: SelectionTracker,
    liveness: LivenessFlag,
}

impl ProjectView {
    /// Construct the view and perform the initial fetch.
    pub fn mount(project_id: &str, client: &dyn ApiClient, notifier: &dyn Notifier) -> Self {
        let mut view = Self::detached(project_id);
        view.refresh(client, notifier);
        view
    }

    /// Construct the view without fetching (pre-mount state).
    pub fn detached(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            store: ProjectStore::new(),
            selection: SelectionTracker::new(),
            liveness: LivenessFlag::new(),
        }
    }

    /// Re-fetch the project aggregate.
    ///
    /// Success replaces the store wholesale; the selection is left as-is.
    /// Failure notifies and keeps the last-known-good project. Overlapping
    /// refreshes are not deduplicated; the latest response to land wins.
    pub fn refresh(&mut self, client: &dyn ApiClient, notifier: &dyn Notifier) {
        let token = self.liveness.token();
        let result = actions::fetch_project(client, &self.project_id);
        self.apply_fetch(token, result, notifier);
    }

    /// Continuation entry point for a fetch issued earlier.
    ///
    /// The token is acquired at request issue; once the view is unmounted,
    /// a late-landing response must not write to it.
    pub fn apply_fetch(
        &mut self,
        token: LivenessToken,
        result: Result<Project, ApiError>,
        notifier: &dyn Notifier,
    ) {
        if !token.is_live() {
            tracing::debug!(
                event = "ui.project_view.stale_continuation",
                project_id = self.project_id,
                "Fetch resolved after unmount, dropping result"
            );
            return;
        }

        match result {
            Ok(project) => self.store.apply(project),
            Err(e) => {
                self.store.set_error(e.to_string());
                notifier.report(&e);
            }
        }
    }

    /// Export the project. No view state is mutated on either outcome.
    pub fn export(&self, client: &dyn ApiClient, saver: &dyn FileSaver, notifier: &dyn Notifier) {
        if let Err(e) = actions::export_project(client, saver, &self.project_id) {
            notifier.report(&e);
        }
    }

    /// Row-level select/deselect event from the table toolkit.
    pub fn on_row_select(&mut self, application: &Application, mode: SelectMode) {
        match mode {
            SelectMode::Select => self.selection.select(application),
            SelectMode::Deselect => self.selection.deselect(application),
        }
    }

    /// Header-level select-all/deselect-all event from the table toolkit.
    ///
    /// Select-all snapshots the currently held application list; it is the
    /// only path by which the selection is populated from the store.
    pub fn on_select_all(&mut self, mode: SelectMode) {
        match mode {
            SelectMode::Select => {
                let applications = self.store.project().applications.clone();
                self.selection.select_all(&applications);
            }
            SelectMode::Deselect => self.selection.deselect_all(),
        }
    }

    /// Whether the given application row renders as selected.
    pub fn is_selected(&self, application_id: &str) -> bool {
        self.selection.contains(application_id)
    }

    /// Selected entries whose application no longer exists in the held
    /// project.
    ///
    /// A refresh never prunes the selection, so after a delete workflow the
    /// selection can reference ids the server dropped. The embedding reads
    /// this to flag those rows.
    pub fn stale_selection(&self) -> Vec<&SelectionEntry> {
        self.selection
            .current()
            .iter()
            .filter(|e| !self.store.project().contains_application(&e.id))
            .collect()
    }

    /// Whether the selection-scoped workflow buttons are enabled.
    pub fn can_dispatch(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Run a modal workflow; a successful run triggers a refresh.
    ///
    /// Selection-requiring workflows are inert while the selection is empty
    /// (their buttons are disabled). The refresh after success does not clear
    /// the selection.
    pub fn dispatch(
        &mut self,
        workflow: &dyn ModalWorkflow,
        client: &dyn ApiClient,
        notifier: &dyn Notifier,
    ) {
        let kind = workflow.kind();
        if kind.requires_selection() && self.selection.is_empty() {
            tracing::warn!(
                event = "ui.project_view.dispatch_without_selection",
                workflow = ?kind
            );
            return;
        }

        match workflow.run(&self.project_id, self.selection.current()) {
            Ok(()) => {
                tracing::info!(
                    event = "ui.project_view.workflow_completed",
                    workflow = ?kind
                );
                self.refresh(client, notifier);
            }
            Err(message) => {
                tracing::error!(
                    event = "ui.project_view.workflow_failed",
                    workflow = ?kind,
                    error = message
                );
            }
        }
    }

    /// Tear the view down. Outstanding fetch continuations become no-ops.
    pub fn unmount(&mut self) {
        self.liveness.release();
    }

    /// Acquire a liveness token for a fetch issued by the embedding.
    pub fn fetch_token(&self) -> LivenessToken {
        self.liveness.token()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn project(&self) -> &Project {
        self.store.project()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.store.load_error()
    }

    pub fn last_refresh(&self) -> Instant {
        self.store.last_refresh()
    }

    pub fn selection(&self) -> &[SelectionEntry] {
        self.selection.current()
    }
}
