//! Application table column contract.
//!
//! The search/sort/pagination widget is an external collaborator; this
//! module supplies the contract it renders against: the column set, the
//! default sort, the link target behind the name cell, and the hint shown
//! for an empty table.

/// One column in the application table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Dot-path into the row's data (e.g. `statusCount.MOCKED`).
    pub field: &'static str,
    /// Header text.
    pub title: &'static str,
    pub sortable: bool,
    pub hidden: bool,
}

/// Sort direction for the default sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Hint rendered when the project has no applications yet.
pub const NO_DATA_HINT: &str = "Click on the 'Upload' to upload a REST API definition";

const COLUMNS: &[Column] = &[
    Column {
        field: "id",
        title: "id",
        sortable: false,
        hidden: true,
    },
    Column {
        field: "name",
        title: "Name",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.MOCKED",
        title: "Mocked",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.DISABLED",
        title: "Disabled",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.FORWARDED",
        title: "Forwarded",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.RECORDING",
        title: "Recording",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.RECORD_ONCE",
        title: "Record once",
        sortable: true,
        hidden: false,
    },
    Column {
        field: "statusCount.ECHO",
        title: "Echo",
        sortable: true,
        hidden: false,
    },
];

/// The application table's columns, in render order.
pub fn columns() -> &'static [Column] {
    COLUMNS
}

/// The default sort applied before the operator clicks a header.
pub fn default_sort() -> (&'static str, SortOrder) {
    ("name", SortOrder::Ascending)
}

/// Link target behind an application's name cell.
pub fn application_link(project_id: &str, application_id: &str) -> String {
    format!("/web/rest/project/{project_id}/application/{application_id}")
}
