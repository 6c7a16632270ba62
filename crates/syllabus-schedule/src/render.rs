use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use syllabus_core::models::lecture::LectureRecord;

static TITLE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Lecture (\d+) \((\d{4}-\d{2}-\d{2}) ").unwrap());

/// `Lecture NN (YYYY-MM-DD Day): Topic`
pub fn build_issue_title(lecture: &LectureRecord) -> String {
    format!(
        "Lecture {:02} ({} {}): {}",
        lecture.sequence_number,
        lecture.date.format("%Y-%m-%d"),
        lecture.day_name,
        lecture.topic_title
    )
}

pub fn build_issue_body(lecture: &LectureRecord) -> String {
    let deliverables = if lecture.deliverables.is_empty() {
        "None listed"
    } else {
        lecture.deliverables.as_str()
    };
    let details = if lecture.topic_details.is_empty() {
        "N/A"
    } else {
        lecture.topic_details.as_str()
    };

    format!(
        "## Lecture details\n\
         - Week: {week}\n\
         - Date: {date} ({day})\n\
         - Topic: {topic}\n\
         - Details: {details}\n\
         - Deliverables: {deliverables}\n\
         \n\
         ## Content to upload\n\
         - [ ] Slides (PDF)\n\
         - [ ] Lecture notes (Markdown)\n\
         - [ ] Code (notebook or scripts)\n\
         - [ ] Data files or links (if any)\n\
         - [ ] Readings or references\n\
         - [ ] Recording link (if available)\n\
         - [ ] Canvas updates (Modules, Announcements)\n\
         \n\
         ## Suggested repo structure\n\
         - [ ] Create or update: lectures/week-{week:02}/lecture-{number:02}/\n\
         - [ ] Add: slides.pdf, notes.md, code/, data/ (optional)\n",
        week = lecture.week,
        date = lecture.date.format("%Y-%m-%d"),
        day = lecture.day_name,
        topic = lecture.topic_title,
        number = lecture.sequence_number,
    )
}

/// Recover the lecture number and date from a title produced by
/// [`build_issue_title`], even if its topic was edited since.
pub fn parse_title_key(title: &str) -> Option<(u32, NaiveDate)> {
    let caps = TITLE_KEY.captures(title)?;
    let number = caps[1].parse().ok()?;
    let date = NaiveDate::parse_from_str(&caps[2], "%Y-%m-%d").ok()?;
    Some((number, date))
}
