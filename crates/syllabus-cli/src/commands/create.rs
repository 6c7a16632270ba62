use std::path::PathBuf;

use clap::Args;
use console::style;
use syllabus_core::config::SyllabusConfig;
use syllabus_sync::labels::LabelPolicy;
use syllabus_sync::{Pipeline, RunEvent, RunOptions, RunSummary};
use syllabus_tracker::{GhCli, IssueTracker};

#[derive(Args)]
pub struct CreateArgs {
    /// Target repository (owner/name)
    #[arg(long)]
    repo: Option<String>,
    /// Path to the schedule markdown
    #[arg(long)]
    schedule: Option<PathBuf>,
    /// Year for the schedule's "Mon DD" dates
    #[arg(long)]
    year: Option<i32>,
    /// Print what would be created without touching the tracker
    #[arg(long)]
    dry_run: bool,
    /// Do not create or apply labels
    #[arg(long)]
    no_labels: bool,
}

pub fn run(args: CreateArgs, config: &SyllabusConfig) -> anyhow::Result<()> {
    let repo = args.repo.unwrap_or_else(|| config.repo.clone());
    let tracker = GhCli::from_config(config, repo);
    tracker.check_auth()?;

    let schedule = args.schedule.unwrap_or_else(|| config.schedule.clone());
    let lectures = super::load_schedule(&schedule, args.year.unwrap_or(config.year))?;
    tracing::debug!(repo = tracker.repo(), lectures = lectures.len(), "starting run");

    let options = RunOptions {
        dry_run: args.dry_run,
        apply_labels: !args.no_labels,
        labels: LabelPolicy::new(config.lecture_label.clone(), &config.week_label_color),
    };
    let summary = Pipeline::new(&tracker, options).run(&lectures, print_event)?;
    print_summary(&summary);
    Ok(())
}

fn print_event(event: &RunEvent) {
    match event {
        RunEvent::LabelCreated { name } => println!("{} {name}", style("[LABEL]").cyan()),
        RunEvent::LabelPlanned { name } => {
            println!("{} label {name}", style("[DRY-RUN]").cyan())
        }
        RunEvent::Skipped { title } => println!("{} {title}", style("[SKIP]").yellow()),
        RunEvent::Renamed { title, existing } => println!(
            "{} {title} looks like a renamed copy of \"{existing}\"",
            style("[WARN]").red()
        ),
        RunEvent::Planned { title, labels } => {
            println!("{} {title} | labels={labels:?}", style("[DRY-RUN]").cyan())
        }
        RunEvent::Created { title, reference } => {
            println!("{} {title}", style("[CREATED]").green());
            if !reference.is_empty() {
                println!("          {reference}");
            }
        }
    }
}

fn print_summary(summary: &RunSummary) {
    let (created, labels) = if summary.dry_run {
        ("Would create", "Labels to create")
    } else {
        ("Created", "Labels created")
    };
    println!(
        "\nDone. {created}: {} | Skipped: {} | Total lectures: {} | {labels}: {}",
        summary.created, summary.skipped, summary.total, summary.labels_created
    );
}
