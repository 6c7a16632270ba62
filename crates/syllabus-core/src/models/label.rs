use serde::{Deserialize, Serialize};

/// A label as it should exist on the remote tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    /// Hex colour without the leading `#`.
    pub color: String,
    pub description: String,
}

impl LabelSpec {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }

    /// The label grouping all lectures of one week.
    pub fn week(week: u32, color: &str) -> Self {
        Self::new(week_label_name(week), color, format!("Week {week} lectures"))
    }
}

pub fn week_label_name(week: u32) -> String {
    format!("week-{week:02}")
}
