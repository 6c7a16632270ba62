use std::collections::HashSet;
use std::io::{ErrorKind, Write};
use std::process::Command;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use syllabus_core::config::SyllabusConfig;
use syllabus_core::error::SyllabusError;
use syllabus_core::models::label::LabelSpec;

use crate::{IssueTracker, NewIssue};

/// Result of a tracker CLI invocation.
#[derive(Debug)]
struct GhOutput {
    stdout: String,
    stderr: String,
    success: bool,
}

impl GhOutput {
    /// Stdout and stderr joined, for error messages.
    fn combined(&self) -> String {
        [self.stdout.trim(), self.stderr.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct GhIssue {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GhLabel {
    name: Option<String>,
}

/// Talks to the tracker through the GitHub CLI, which owns authentication.
pub struct GhCli {
    program: String,
    repo: String,
    issue_limit: u32,
    label_limit: u32,
}

impl GhCli {
    /// A client using the default fetch limits.
    pub fn new(program: impl Into<String>, repo: impl Into<String>) -> Self {
        let defaults = SyllabusConfig::default();
        Self {
            program: program.into(),
            repo: repo.into(),
            issue_limit: defaults.issue_limit,
            label_limit: defaults.label_limit,
        }
    }

    /// A client for `repo` using the program and limits from `config`.
    pub fn from_config(config: &SyllabusConfig, repo: impl Into<String>) -> Self {
        Self {
            program: config.gh_program.clone(),
            repo: repo.into(),
            issue_limit: config.issue_limit,
            label_limit: config.label_limit,
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run the CLI with the given arguments.
    fn gh(&self, args: &[&str]) -> Result<GhOutput, SyllabusError> {
        tracing::debug!(command = %self.command_line(args), "invoking tracker cli");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SyllabusError::CliNotFound {
                    program: self.program.clone(),
                },
                _ => SyllabusError::Io(e),
            })?;

        Ok(GhOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    /// Run the CLI, returning an error if it exits non-zero.
    fn gh_ok(&self, args: &[&str]) -> Result<String, SyllabusError> {
        let out = self.gh(args)?;
        if !out.success {
            return Err(SyllabusError::CommandFailed {
                command: self.command_line(args),
                output: out.combined(),
            });
        }
        Ok(out.stdout.trim().to_string())
    }

    fn gh_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<Vec<T>, SyllabusError> {
        decode_list(&self.gh_ok(args)?)
    }
}

/// Decode a JSON array; empty output counts as an empty list.
fn decode_list<T: DeserializeOwned>(out: &str) -> Result<Vec<T>, SyllabusError> {
    if out.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(out).map_err(|e| SyllabusError::Serialization(e.to_string()))
}

impl IssueTracker for GhCli {
    fn check_auth(&self) -> Result<(), SyllabusError> {
        let out = self.gh(&["auth", "status"])?;
        if !out.success {
            return Err(SyllabusError::NotAuthenticated {
                message: out.combined(),
            });
        }
        Ok(())
    }

    fn list_issue_titles(&self) -> Result<HashSet<String>, SyllabusError> {
        let limit = self.issue_limit.to_string();
        let issues: Vec<GhIssue> = self.gh_json(&[
            "issue", "list", "--repo", &self.repo, "--state", "all", "--limit", &limit, "--json",
            "title",
        ])?;
        Ok(issues
            .into_iter()
            .filter_map(|i| i.title)
            .filter(|t| !t.is_empty())
            .collect())
    }

    fn list_label_names(&self) -> Result<HashSet<String>, SyllabusError> {
        let limit = self.label_limit.to_string();
        let labels: Vec<GhLabel> = self.gh_json(&[
            "label", "list", "--repo", &self.repo, "--limit", &limit, "--json", "name",
        ])?;
        Ok(labels
            .into_iter()
            .filter_map(|l| l.name)
            .filter(|n| !n.is_empty())
            .collect())
    }

    fn create_label(&self, label: &LabelSpec) -> Result<(), SyllabusError> {
        self.gh_ok(&[
            "label",
            "create",
            &label.name,
            "--repo",
            &self.repo,
            "--color",
            &label.color,
            "--description",
            &label.description,
        ])?;
        tracing::info!(label = %label.name, repo = %self.repo, "created label");
        Ok(())
    }

    fn create_issue(&self, issue: &NewIssue) -> Result<String, SyllabusError> {
        // Removed when dropped, whether or not the CLI succeeds.
        let mut body_file = tempfile::Builder::new()
            .prefix("syllabus-")
            .suffix(".md")
            .tempfile()?;
        body_file.write_all(issue.body.as_bytes())?;
        body_file.flush()?;
        let body_path = body_file.path().to_string_lossy().into_owned();

        let mut args: Vec<&str> = vec![
            "issue",
            "create",
            "--repo",
            &self.repo,
            "--title",
            &issue.title,
            "--body-file",
            &body_path,
        ];
        for label in &issue.labels {
            args.push("--label");
            args.push(label);
        }

        let out = self.gh_ok(&args)?;
        tracing::info!(title = %issue.title, repo = %self.repo, "created issue");
        Ok(out)
    }
}
