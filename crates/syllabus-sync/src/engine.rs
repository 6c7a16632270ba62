use syllabus_core::error::SyllabusError;
use syllabus_core::models::label::LabelSpec;
use syllabus_core::models::lecture::LectureRecord;
use syllabus_schedule::{build_issue_body, build_issue_title};
use syllabus_tracker::{IssueTracker, NewIssue};

use crate::duplicates::ExistingIssues;
use crate::labels::{missing_labels, LabelPolicy};

/// How a run behaves.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Read from the tracker but never write to it.
    pub dry_run: bool,
    /// Provision labels and attach them to new issues.
    pub apply_labels: bool,
    pub labels: LabelPolicy,
}

/// Progress reported while a run is underway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    LabelCreated { name: String },
    LabelPlanned { name: String },
    /// An issue with this exact title already exists.
    Skipped { title: String },
    /// An existing issue covers the same lecture under an older title.
    Renamed { title: String, existing: String },
    Planned { title: String, labels: Vec<String> },
    Created { title: String, reference: String },
}

/// Counts for the end-of-run summary. `created + skipped == total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub skipped: usize,
    pub total: usize,
    pub labels_created: usize,
    pub dry_run: bool,
}

/// Files one issue per lecture that the tracker does not have yet.
pub struct Pipeline<'a, T: IssueTracker + ?Sized> {
    tracker: &'a T,
    options: RunOptions,
}

impl<'a, T: IssueTracker + ?Sized> Pipeline<'a, T> {
    pub fn new(tracker: &'a T, options: RunOptions) -> Self {
        Self { tracker, options }
    }

    /// Run against the tracker, reporting each step to `on_event`.
    ///
    /// Stops at the first tracker failure. Issues filed before it stay filed
    /// and are skipped on the next run.
    pub fn run<F>(&self, lectures: &[LectureRecord], mut on_event: F) -> Result<RunSummary, SyllabusError>
    where
        F: FnMut(&RunEvent),
    {
        let existing = ExistingIssues::fetch(self.tracker)?;

        let mut summary = RunSummary {
            total: lectures.len(),
            dry_run: self.options.dry_run,
            ..RunSummary::default()
        };

        if self.options.apply_labels {
            summary.labels_created = self.ensure_labels(lectures, &mut on_event)?;
        }

        for lecture in lectures {
            let title = build_issue_title(lecture);
            if existing.contains(&title) {
                on_event(&RunEvent::Skipped { title });
                summary.skipped += 1;
                continue;
            }

            if let Some(older) = existing.renamed_match(lecture, &title) {
                tracing::warn!(
                    lecture = lecture.sequence_number,
                    existing = older,
                    "an issue for this lecture exists under a different title; creating another"
                );
                on_event(&RunEvent::Renamed {
                    title: title.clone(),
                    existing: older.to_string(),
                });
            }

            let issue = NewIssue {
                body: build_issue_body(lecture),
                labels: if self.options.apply_labels {
                    self.options.labels.issue_labels(lecture)
                } else {
                    Vec::new()
                },
                title,
            };

            if self.options.dry_run {
                on_event(&RunEvent::Planned {
                    title: issue.title,
                    labels: issue.labels,
                });
            } else {
                let reference = self.tracker.create_issue(&issue)?;
                on_event(&RunEvent::Created {
                    title: issue.title,
                    reference,
                });
            }
            summary.created += 1;
        }

        Ok(summary)
    }

    /// Create the labels the lectures need. Returns how many were (or in a
    /// dry run, would be) created.
    fn ensure_labels<F>(&self, lectures: &[LectureRecord], on_event: &mut F) -> Result<usize, SyllabusError>
    where
        F: FnMut(&RunEvent),
    {
        let needed = self.options.labels.needed_labels(lectures);
        let missing: Vec<LabelSpec> = missing_labels(self.tracker, needed)?;

        for label in &missing {
            if self.options.dry_run {
                on_event(&RunEvent::LabelPlanned {
                    name: label.name.clone(),
                });
            } else {
                self.tracker.create_label(label)?;
                on_event(&RunEvent::LabelCreated {
                    name: label.name.clone(),
                });
            }
        }
        Ok(missing.len())
    }
}
