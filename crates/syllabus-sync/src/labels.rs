use std::collections::BTreeSet;

use syllabus_core::error::SyllabusError;
use syllabus_core::models::label::LabelSpec;
use syllabus_core::models::lecture::LectureRecord;
use syllabus_tracker::IssueTracker;

/// Which labels lectures get and how new ones look.
#[derive(Debug, Clone)]
pub struct LabelPolicy {
    pub lecture: LabelSpec,
    pub week_color: String,
}

impl LabelPolicy {
    pub fn new(lecture: LabelSpec, week_color: impl Into<String>) -> Self {
        Self {
            lecture,
            week_color: week_color.into(),
        }
    }

    /// The lecture label first, then one label per distinct week, ascending.
    pub fn needed_labels(&self, lectures: &[LectureRecord]) -> Vec<LabelSpec> {
        let weeks: BTreeSet<u32> = lectures.iter().map(|l| l.week).collect();
        std::iter::once(self.lecture.clone())
            .chain(weeks.into_iter().map(|w| LabelSpec::week(w, &self.week_color)))
            .collect()
    }

    /// Labels attached to the issue for one lecture.
    pub fn issue_labels(&self, lecture: &LectureRecord) -> Vec<String> {
        vec![self.lecture.name.clone(), lecture.week_label()]
    }
}

/// Labels from `needed` that the tracker lacks, in their original order.
/// Existing labels are left alone even if their colour or description differ.
pub fn missing_labels<T: IssueTracker + ?Sized>(
    tracker: &T,
    needed: Vec<LabelSpec>,
) -> Result<Vec<LabelSpec>, SyllabusError> {
    let existing = tracker.list_label_names()?;
    Ok(needed
        .into_iter()
        .filter(|label| !existing.contains(&label.name))
        .collect())
}
