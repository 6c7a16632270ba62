use std::path::PathBuf;

/// Central error type for syllabus.
#[derive(Debug, thiserror::Error)]
pub enum SyllabusError {
    #[error("{program} not found. Install it and run: {program} auth login")]
    CliNotFound { program: String },

    #[error("not authenticated with the issue tracker: {message}")]
    NotAuthenticated { message: String },

    #[error("command failed: {command}\n{output}")]
    CommandFailed { command: String, output: String },

    #[error("schedule file not found: {}", path.display())]
    ScheduleNotFound { path: PathBuf },

    #[error("schedule parse error: {message}")]
    Parse { message: String },

    #[error("invalid date {value:?}: {message}")]
    InvalidDate { value: String, message: String },

    #[error("invalid week {value:?}: expected a positive week number")]
    InvalidWeek { value: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyllabusError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
