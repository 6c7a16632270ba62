use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::label::week_label_name;

/// One parsed row of the weekly schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureRecord {
    /// 1-based ordinal across all parsed rows, without gaps.
    pub sequence_number: u32,
    pub week: u32,
    pub date: NaiveDate,
    pub day_name: String,
    pub topic_title: String,
    /// Text after the first " - " in the topic cell; empty if there was none.
    pub topic_details: String,
    pub deliverables: String,
}

impl LectureRecord {
    /// Name of the per-week label this lecture belongs to.
    pub fn week_label(&self) -> String {
        week_label_name(self.week)
    }
}
