pub mod config;
pub mod create;
pub mod preview;

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use syllabus_core::config::SyllabusConfig;
use syllabus_core::error::SyllabusError;
use syllabus_core::models::lecture::LectureRecord;

#[derive(Subcommand)]
pub enum Command {
    /// Initialize and show syllabus configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
    /// Parse the schedule and show the lectures without contacting the tracker
    Preview(preview::PreviewArgs),
}

pub fn run(
    cmd: Option<Command>,
    create: create::CreateArgs,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    match cmd {
        Some(Command::Config { action }) => config::run(action, config_path),
        Some(Command::Preview(args)) => preview::run(args, &load_config(config_path)?),
        None => create::run(create, &load_config(config_path)?),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SyllabusConfig> {
    let config = match path {
        Some(path) => SyllabusConfig::load_from(path)?,
        None => SyllabusConfig::load()?,
    };
    Ok(config)
}

/// Read and parse the schedule file.
fn load_schedule(path: &Path, year: i32) -> anyhow::Result<Vec<LectureRecord>> {
    if !path.exists() {
        return Err(SyllabusError::ScheduleNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let markdown = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lectures = syllabus_schedule::parse_schedule(&markdown, year)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(lectures)
}
