use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;

use syllabus_core::error::SyllabusError;
use syllabus_core::models::lecture::LectureRecord;
use syllabus_schedule::parse_title_key;
use syllabus_tracker::IssueTracker;

/// Issue titles already on the tracker, fetched once per run.
///
/// A planned issue is a duplicate only when its title matches exactly.
#[derive(Debug, Default)]
pub struct ExistingIssues {
    titles: HashSet<String>,
    /// Titles grouped by lecture number and date, each group sorted.
    by_key: BTreeMap<(u32, NaiveDate), BTreeSet<String>>,
}

impl ExistingIssues {
    pub fn fetch<T: IssueTracker + ?Sized>(tracker: &T) -> Result<Self, SyllabusError> {
        let titles = tracker.list_issue_titles()?;
        tracing::debug!(count = titles.len(), "fetched existing issue titles");
        Ok(Self::from_titles(titles))
    }

    pub fn from_titles(titles: HashSet<String>) -> Self {
        let mut by_key: BTreeMap<_, BTreeSet<String>> = BTreeMap::new();
        for title in &titles {
            if let Some(key) = parse_title_key(title) {
                by_key.entry(key).or_default().insert(title.clone());
            }
        }
        Self { titles, by_key }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// An existing title for the same lecture number and date whose text
    /// differs from `title`, e.g. after the topic was renamed. The
    /// alphabetically first one wins when there are several.
    pub fn renamed_match(&self, lecture: &LectureRecord, title: &str) -> Option<&str> {
        self.by_key
            .get(&(lecture.sequence_number, lecture.date))?
            .iter()
            .map(String::as_str)
            .find(|existing| *existing != title)
    }
}
