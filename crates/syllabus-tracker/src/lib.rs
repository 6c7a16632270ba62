pub mod gh;
pub mod memory;

use std::collections::HashSet;

use syllabus_core::error::SyllabusError;
use syllabus_core::models::label::LabelSpec;

pub use gh::GhCli;
pub use memory::MemoryTracker;

/// An issue ready to be filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The remote issue tracker of one repository.
///
/// Every call blocks until the tracker answers.
pub trait IssueTracker: Send + Sync {
    /// Fail unless there is an authenticated session.
    fn check_auth(&self) -> Result<(), SyllabusError>;

    /// Titles of all issues, open or closed, up to the configured limit.
    fn list_issue_titles(&self) -> Result<HashSet<String>, SyllabusError>;

    /// Names of all labels, up to the configured limit.
    fn list_label_names(&self) -> Result<HashSet<String>, SyllabusError>;

    fn create_label(&self, label: &LabelSpec) -> Result<(), SyllabusError>;

    /// File an issue. Returns whatever identifier the tracker reported,
    /// usually the issue URL, or an empty string.
    fn create_issue(&self, issue: &NewIssue) -> Result<String, SyllabusError>;
}
