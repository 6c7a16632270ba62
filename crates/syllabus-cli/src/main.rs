mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use syllabus_core::error::SyllabusError;

#[derive(Parser)]
#[command(
    name = "syllabus",
    version,
    about = "Create one tracker issue per lecture in a course schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Command>,

    #[command(flatten)]
    create: commands::create::CreateArgs,

    /// Config file to use instead of ~/.syllabus/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every tracker command
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match commands::run(cli.command, cli.create, cli.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code(&err)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<SyllabusError>() {
        Some(SyllabusError::ScheduleNotFound { .. }) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
