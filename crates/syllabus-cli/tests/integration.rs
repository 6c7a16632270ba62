use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use syllabus_core::config::SyllabusConfig;
use syllabus_schedule::{build_issue_body, build_issue_title, parse_schedule, parse_title_key};
use syllabus_sync::labels::LabelPolicy;
use syllabus_sync::{Pipeline, RunEvent, RunOptions};
use syllabus_tracker::MemoryTracker;

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schedule.md");
    std::fs::read_to_string(path).unwrap()
}

fn options(dry_run: bool) -> RunOptions {
    let config = SyllabusConfig::default();
    RunOptions {
        dry_run,
        apply_labels: true,
        labels: LabelPolicy::new(config.lecture_label, config.week_label_color),
    }
}

#[test]
fn test_config_defaults() {
    let config = SyllabusConfig::default();
    assert_eq!(config.repo, "aaneloy/FRE521D-Winter2026-UBC");
    assert_eq!(config.schedule, PathBuf::from("FRE521D_Schedule.md"));
    assert_eq!(config.year, 2026);
    assert_eq!(config.gh_program, "gh");
}

#[test]
fn test_parse_fixture() {
    let lectures = parse_schedule(&fixture(), 2026).unwrap();
    assert_eq!(lectures.len(), 6);

    let numbers: Vec<u32> = lectures.iter().map(|l| l.sequence_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    let weeks: Vec<u32> = lectures.iter().map(|l| l.week).collect();
    assert_eq!(weeks, vec![1, 1, 2, 2, 3, 3]);

    assert_eq!(lectures[0].topic_title, "Introduction");
    assert_eq!(lectures[0].topic_details, "course overview and tooling");
    assert_eq!(lectures[2].topic_title, "Data wrangling");
    assert_eq!(lectures[4].topic_details, "linear models");
    assert_eq!(lectures[5].date, NaiveDate::from_ymd_opt(2026, 1, 21).unwrap());
}

#[test]
fn test_titles_recover_number_and_date() {
    for lecture in parse_schedule(&fixture(), 2026).unwrap() {
        let title = build_issue_title(&lecture);
        assert_eq!(
            parse_title_key(&title),
            Some((lecture.sequence_number, lecture.date))
        );
    }
}

#[test]
fn test_full_pipeline_in_memory() {
    let lectures = parse_schedule(&fixture(), 2026).unwrap();
    let already_filed = build_issue_title(&lectures[3]);
    let tracker = MemoryTracker::new()
        .with_issue_titles([already_filed.clone(), "Set up course site".to_string()])
        .with_labels(["lecture"]);

    let mut events = Vec::new();
    let summary = Pipeline::new(&tracker, options(false))
        .run(&lectures, |e| events.push(e.clone()))
        .unwrap();

    assert_eq!(summary.created, 5);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.created + summary.skipped, summary.total);
    assert_eq!(summary.labels_created, 3);

    let created = tracker.created_issues();
    let titles: HashSet<&str> = created.iter().map(|i| i.title.as_str()).collect();
    assert!(!titles.contains(already_filed.as_str()));
    assert_eq!(created[0].body, build_issue_body(&lectures[0]));
    assert!(created[0].body.contains("- Deliverables: None listed\n"));
    assert!(created[1].body.contains("- Deliverables: Survey\n"));
    assert!(created[2].body.contains("- Details: N/A\n"));
    assert!(events.contains(&RunEvent::Skipped {
        title: already_filed
    }));

    // A second run files nothing new.
    let summary = Pipeline::new(&tracker, options(false))
        .run(&lectures, |_| {})
        .unwrap();
    assert_eq!(summary.created, 0);
    assert_eq!(summary.skipped, 6);
    assert_eq!(tracker.created_issues().len(), 5);
}

#[test]
fn test_dry_run_in_memory() {
    let lectures = parse_schedule(&fixture(), 2026).unwrap();
    let tracker = MemoryTracker::new();
    let summary = Pipeline::new(&tracker, options(true))
        .run(&lectures, |_| {})
        .unwrap();

    assert_eq!(summary.created, 6);
    assert!(summary.dry_run);
    assert!(tracker.created_issues().is_empty());
    assert!(tracker.created_labels().is_empty());
    assert_eq!(tracker.title_fetches(), 1);
}

#[cfg(unix)]
mod binary {
    use std::process::Command;

    use super::*;

    /// Config pointing the tracker CLI at `program`.
    fn config_file(dir: &tempfile::TempDir, program: &str) -> PathBuf {
        let config = SyllabusConfig {
            gh_program: program.to_string(),
            ..SyllabusConfig::default()
        };
        let path = dir.path().join("config.toml");
        config.save_to(&path).unwrap();
        path
    }

    fn syllabus() -> Command {
        Command::new(env!("CARGO_BIN_EXE_syllabus"))
    }

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/schedule.md")
    }

    #[test]
    fn test_missing_schedule_exits_2() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "true");
        let out = syllabus()
            .arg("--config")
            .arg(&config)
            .arg("--schedule")
            .arg(dir.path().join("missing.md"))
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(2));
        assert!(String::from_utf8_lossy(&out.stderr).contains("schedule file not found"));
    }

    #[test]
    fn test_failed_auth_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "false");
        let out = syllabus()
            .arg("--config")
            .arg(&config)
            .arg("--schedule")
            .arg(fixture_path())
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("not authenticated"));
    }

    #[test]
    fn test_dry_run_prints_plan() {
        // `true` authenticates and lists nothing.
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "true");
        let out = syllabus()
            .arg("--config")
            .arg(&config)
            .arg("--schedule")
            .arg(fixture_path())
            .arg("--dry-run")
            .output()
            .unwrap();
        assert!(out.status.success());

        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("label week-03"));
        assert!(stdout.contains("Lecture 01 (2026-01-05 Mon): Introduction | labels=[\"lecture\", \"week-01\"]"));
        assert!(stdout.contains(
            "Would create: 6 | Skipped: 0 | Total lectures: 6 | Labels to create: 4"
        ));
    }

    #[test]
    fn test_preview_titles() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "false");
        let out = syllabus()
            .arg("--config")
            .arg(&config)
            .arg("preview")
            .arg("--schedule")
            .arg(fixture_path())
            .arg("--titles")
            .output()
            .unwrap();
        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert_eq!(stdout.lines().count(), 6);
        assert!(stdout.contains("Lecture 06 (2026-01-21 Wed): Regression"));
    }

    /// Executable shell script standing in for the tracker CLI.
    fn script(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_created_lines_show_reference() {
        // Knows one existing issue and one label; answers creates with a URL.
        let dir = tempfile::tempdir().unwrap();
        let program = script(
            &dir,
            "gh-stand-in",
            r#"case "$1 $2" in
  "issue list") echo '[{"title":"Lecture 02 (2026-01-07 Wed): Python refresher"}]' ;;
  "label list") echo '[{"name":"lecture"}]' ;;
  "issue create") echo "https://example.invalid/issues/7" ;;
esac
"#,
        );
        let config = config_file(&dir, &program);
        let out = syllabus()
            .arg("--config")
            .arg(&config)
            .arg("--schedule")
            .arg(fixture_path())
            .output()
            .unwrap();
        assert!(out.status.success());

        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("[CREATED] Lecture 01 (2026-01-05 Mon): Introduction\n          https://example.invalid/issues/7\n"));
        assert!(stdout.contains("[SKIP] Lecture 02 (2026-01-07 Wed): Python refresher"));
        assert!(stdout.contains("[LABEL] week-01"));
        assert!(stdout.contains(
            "Created: 5 | Skipped: 1 | Total lectures: 6 | Labels created: 3"
        ));
    }

    #[test]
    fn test_config_init_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.toml");
        let init = || {
            let out = syllabus()
                .arg("--config")
                .arg(&path)
                .args(["config", "init"])
                .output()
                .unwrap();
            assert!(out.status.success());
            String::from_utf8_lossy(&out.stdout).into_owned()
        };

        assert!(init().starts_with("Initialized syllabus config at"));
        std::fs::write(&path, "year = 2030\n").unwrap();
        assert!(init().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "year = 2030\n");
    }
}
