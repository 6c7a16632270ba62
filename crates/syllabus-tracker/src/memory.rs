use std::collections::HashSet;
use std::sync::Mutex;

use syllabus_core::error::SyllabusError;
use syllabus_core::models::label::LabelSpec;

use crate::{IssueTracker, NewIssue};

#[derive(Default)]
struct MemoryState {
    titles: HashSet<String>,
    labels: HashSet<String>,
    created_issues: Vec<NewIssue>,
    created_labels: Vec<LabelSpec>,
    title_fetches: usize,
}

/// In-memory tracker for testing. Records every mutation it receives.
pub struct MemoryTracker {
    state: Mutex<MemoryState>,
    authenticated: bool,
    fail_on_title: Option<String>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            authenticated: true,
            fail_on_title: None,
        }
    }

    pub fn with_issue_titles<I, S>(self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .lock()
            .unwrap()
            .titles
            .extend(titles.into_iter().map(Into::into));
        self
    }

    pub fn with_labels<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .lock()
            .unwrap()
            .labels
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Make `check_auth` fail.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Make `create_issue` fail for the issue with this title.
    pub fn failing_on(mut self, title: impl Into<String>) -> Self {
        self.fail_on_title = Some(title.into());
        self
    }

    pub fn created_issues(&self) -> Vec<NewIssue> {
        self.state.lock().unwrap().created_issues.clone()
    }

    pub fn created_labels(&self) -> Vec<LabelSpec> {
        self.state.lock().unwrap().created_labels.clone()
    }

    /// Number of times the issue titles were listed.
    pub fn title_fetches(&self) -> usize {
        self.state.lock().unwrap().title_fetches
    }
}

impl Default for MemoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTracker for MemoryTracker {
    fn check_auth(&self) -> Result<(), SyllabusError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(SyllabusError::NotAuthenticated {
                message: "You are not logged into any hosts".to_string(),
            })
        }
    }

    fn list_issue_titles(&self) -> Result<HashSet<String>, SyllabusError> {
        let mut state = self.state.lock().unwrap();
        state.title_fetches += 1;
        Ok(state.titles.clone())
    }

    fn list_label_names(&self) -> Result<HashSet<String>, SyllabusError> {
        Ok(self.state.lock().unwrap().labels.clone())
    }

    fn create_label(&self, label: &LabelSpec) -> Result<(), SyllabusError> {
        let mut state = self.state.lock().unwrap();
        state.labels.insert(label.name.clone());
        state.created_labels.push(label.clone());
        Ok(())
    }

    fn create_issue(&self, issue: &NewIssue) -> Result<String, SyllabusError> {
        if self.fail_on_title.as_deref() == Some(issue.title.as_str()) {
            return Err(SyllabusError::CommandFailed {
                command: format!("issue create --title {}", issue.title),
                output: "HTTP 502: Bad Gateway".to_string(),
            });
        }
        let mut state = self.state.lock().unwrap();
        state.titles.insert(issue.title.clone());
        state.created_issues.push(issue.clone());
        Ok(format!(
            "https://tracker.invalid/issues/{}",
            state.created_issues.len()
        ))
    }
}
