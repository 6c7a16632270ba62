use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SyllabusError;
use crate::models::label::LabelSpec;

/// Top-level syllabus configuration, stored at `~/.syllabus/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllabusConfig {
    /// Target repository as `owner/name`.
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Schedule markdown file, relative to the working directory.
    #[serde(default = "default_schedule")]
    pub schedule: PathBuf,

    /// Year applied to the "Mon DD" date cells.
    #[serde(default = "default_year")]
    pub year: i32,

    /// Program used to talk to the issue tracker.
    #[serde(default = "default_gh_program")]
    pub gh_program: String,

    /// Upper bound on issues fetched for duplicate detection.
    #[serde(default = "default_issue_limit")]
    pub issue_limit: u32,

    /// Upper bound on labels fetched before provisioning.
    #[serde(default = "default_label_limit")]
    pub label_limit: u32,

    #[serde(default = "default_lecture_label")]
    pub lecture_label: LabelSpec,

    /// Colour for the generated `week-NN` labels.
    #[serde(default = "default_week_label_color")]
    pub week_label_color: String,
}

fn default_repo() -> String {
    "aaneloy/FRE521D-Winter2026-UBC".to_string()
}

fn default_schedule() -> PathBuf {
    PathBuf::from("FRE521D_Schedule.md")
}

fn default_year() -> i32 {
    2026
}

fn default_gh_program() -> String {
    "gh".to_string()
}

fn default_issue_limit() -> u32 {
    2000
}

fn default_label_limit() -> u32 {
    500
}

fn default_lecture_label() -> LabelSpec {
    LabelSpec::new("lecture", "1f6feb", "Lecture content upload tracker")
}

fn default_week_label_color() -> String {
    "c5def5".to_string()
}

impl Default for SyllabusConfig {
    fn default() -> Self {
        Self {
            repo: default_repo(),
            schedule: default_schedule(),
            year: default_year(),
            gh_program: default_gh_program(),
            issue_limit: default_issue_limit(),
            label_limit: default_label_limit(),
            lecture_label: default_lecture_label(),
            week_label_color: default_week_label_color(),
        }
    }
}

impl SyllabusConfig {
    /// Returns the syllabus home directory (`~/.syllabus/`).
    pub fn home_dir() -> Result<PathBuf, SyllabusError> {
        let base = dirs::home_dir().ok_or_else(|| SyllabusError::Config {
            message: "could not determine home directory".into(),
        })?;
        Ok(base.join(".syllabus"))
    }

    /// Returns the path to the config file.
    pub fn config_path() -> Result<PathBuf, SyllabusError> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or return defaults if not found.
    pub fn load() -> Result<Self, SyllabusError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, SyllabusError> {
        if !path.exists() {
            return Err(SyllabusError::Config {
                message: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| SyllabusError::Serialization(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SyllabusError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| SyllabusError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether anything was written.
    pub fn init_at(path: &Path) -> Result<bool, SyllabusError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}
