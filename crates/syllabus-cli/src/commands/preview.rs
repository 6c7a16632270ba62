use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use comfy_table::{Cell, Color, Table};
use syllabus_core::config::SyllabusConfig;
use syllabus_schedule::build_issue_title;

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the schedule markdown
    #[arg(long)]
    schedule: Option<PathBuf>,
    /// Year for the schedule's "Mon DD" dates
    #[arg(long)]
    year: Option<i32>,
    /// Print the issue titles instead of the table
    #[arg(long)]
    titles: bool,
}

pub fn run(args: PreviewArgs, config: &SyllabusConfig) -> anyhow::Result<()> {
    let schedule = args.schedule.unwrap_or_else(|| config.schedule.clone());
    let lectures = super::load_schedule(&schedule, args.year.unwrap_or(config.year))?;

    if args.titles {
        for lecture in &lectures {
            println!("{}", build_issue_title(lecture));
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "WEEK", "DATE", "DAY", "TOPIC", "DETAILS", "DELIVERABLES"]);
    for lecture in &lectures {
        let deliverables = if lecture.deliverables.is_empty() {
            Cell::new("—").fg(Color::DarkGrey)
        } else {
            Cell::new(&lecture.deliverables).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(format!("{:02}", lecture.sequence_number)),
            Cell::new(lecture.week),
            Cell::new(lecture.date.format("%Y-%m-%d")),
            Cell::new(&lecture.day_name),
            Cell::new(&lecture.topic_title).fg(Color::Cyan),
            Cell::new(&lecture.topic_details),
            deliverables,
        ]);
    }
    println!("{table}");

    let weeks: BTreeSet<u32> = lectures.iter().map(|l| l.week).collect();
    println!("\n{} lectures across {} weeks", lectures.len(), weeks.len());
    Ok(())
}
