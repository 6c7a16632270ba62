use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use syllabus_core::error::SyllabusError;
use syllabus_core::models::lecture::LectureRecord;

/// Heading that introduces the schedule table.
pub const SCHEDULE_HEADING: &str = "## Weekly Schedule";

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d]").unwrap());

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse the `## Weekly Schedule` table into lecture records.
///
/// Rows without a week inherit the last declared one. Rows that lack a date,
/// day or topic are spacers and take no lecture number.
pub fn parse_schedule(markdown: &str, year: i32) -> Result<Vec<LectureRecord>, SyllabusError> {
    let table = extract_table(markdown)?;
    if table.len() < 3 {
        return Err(SyllabusError::parse("weekly schedule table seems too short"));
    }

    let mut lectures = Vec::new();
    let mut current_week: Option<u32> = None;

    // Header and separator lines come first.
    for raw in &table[2..] {
        let parts: Vec<&str> = raw.split('|').collect();
        if parts.len() < 7 {
            tracing::debug!(row = raw, "skipping row with too few cells");
            continue;
        }

        let week_cell = clean_cell(parts[1]);
        let date_cell = clean_cell(parts[2]);
        let day_cell = clean_cell(parts[3]);
        let topic_cell = clean_cell(parts[4]);
        let deliverables = clean_cell(parts[5]);

        if !week_cell.is_empty() {
            current_week = Some(parse_week(&week_cell)?);
        }
        let week = current_week.ok_or_else(|| {
            SyllabusError::parse("week number missing before the first lecture row")
        })?;

        if date_cell.is_empty() || day_cell.is_empty() || topic_cell.is_empty() {
            continue;
        }

        let (topic_title, topic_details) = match topic_cell.split_once(" - ") {
            Some((title, details)) => (title.trim().to_string(), details.trim().to_string()),
            None => (topic_cell.clone(), String::new()),
        };

        lectures.push(LectureRecord {
            sequence_number: lectures.len() as u32 + 1,
            week,
            date: parse_month_day(&date_cell, year)?,
            day_name: day_cell,
            topic_title,
            topic_details,
            deliverables,
        });
    }

    if lectures.is_empty() {
        return Err(SyllabusError::parse(
            "no lectures parsed from the weekly schedule table",
        ));
    }
    tracing::debug!(count = lectures.len(), "parsed schedule");
    Ok(lectures)
}

/// Collect the contiguous pipe-delimited block that starts at the `| Week`
/// header inside the schedule section.
fn extract_table(markdown: &str) -> Result<Vec<&str>, SyllabusError> {
    let lines: Vec<&str> = markdown.lines().collect();

    let start = lines
        .iter()
        .position(|line| line.trim() == SCHEDULE_HEADING)
        .ok_or_else(|| {
            SyllabusError::parse(format!("could not find '{SCHEDULE_HEADING}' section"))
        })?;

    let header = lines[start..]
        .iter()
        .position(|line| line.trim_start().starts_with("| Week"))
        .map(|offset| start + offset)
        .ok_or_else(|| SyllabusError::parse("could not find the weekly schedule table header"))?;

    let mut table = Vec::new();
    for line in &lines[header..] {
        if line.trim().is_empty() || !line.trim_start().starts_with('|') {
            if table.is_empty() {
                continue;
            }
            break;
        }
        table.push(*line);
    }
    Ok(table)
}

/// Normalise dashes, drop bold markers and collapse whitespace.
pub fn clean_cell(text: &str) -> String {
    let text = text.trim().replace(['\u{2013}', '\u{2014}'], "-");
    let text = BOLD.replace_all(&text, "$1");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Extract the week number from a cell such as `Week 3` or `**3**`.
pub fn parse_week(cell: &str) -> Result<u32, SyllabusError> {
    let digits = NON_DIGIT.replace_all(cell, "");
    match digits.parse::<u32>() {
        Ok(week) if week > 0 => Ok(week),
        _ => Err(SyllabusError::InvalidWeek {
            value: cell.to_string(),
        }),
    }
}

/// Build a date from `Mon DD` text and a fixed year.
pub fn parse_month_day(text: &str, year: i32) -> Result<NaiveDate, SyllabusError> {
    let invalid = |message: &str| SyllabusError::InvalidDate {
        value: text.to_string(),
        message: message.to_string(),
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    let [month, day] = parts.as_slice() else {
        return Err(invalid("expected \"Mon DD\""));
    };
    let month = MONTHS
        .iter()
        .position(|m| m == month)
        .ok_or_else(|| invalid("unknown month"))? as u32
        + 1;
    let day: u32 = day.parse().map_err(|_| invalid("day is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("no such day"))
}
