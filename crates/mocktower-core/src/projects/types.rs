use serde::{Deserialize, Serialize};

/// Operating mode of a mocked application endpoint.
///
/// Wire format is SCREAMING_SNAKE_CASE, matching the server enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Mocked,
    Disabled,
    Forwarded,
    Recording,
    RecordOnce,
    Echo,
}

/// Aggregate application counts by operating mode.
///
/// Each field maps to one sortable column in the application table. Absent
/// statuses deserialize to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct StatusCount {
    pub mocked: u64,
    pub disabled: u64,
    pub forwarded: u64,
    pub recording: u64,
    pub record_once: u64,
    pub echo: u64,
}

/// A child entity of a project representing one mocked/forwarded API
/// endpoint definition.
///
/// Identity is the `id`, unique within a project. The `name` is display-only
/// and must not be used for equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub status: ApplicationStatus,
}

/// The project aggregate as served by the read endpoint.
///
/// `Default` is the pre-fetch mount state: empty metadata and an empty
/// application list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub applications: Vec<Application>,
    pub status_count: StatusCount,
}

impl Project {
    /// Check whether an application id exists in this project.
    pub fn contains_application(&self, application_id: &str) -> bool {
        self.applications.iter().any(|a| a.id == application_id)
    }
}

/// A lightweight (id, name) record denoting one operator-selected
/// application, decoupled from the authoritative [`Application`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: String,
    pub name: String,
}

impl From<&Application> for SelectionEntry {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id.clone(),
            name: application.name.clone(),
        }
    }
}
