use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn snapshot(window_name: &str, buttons: &[(i64, &str)]) -> String {
    let children: Vec<serde_json::Value> = buttons
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "id": id,
                "name": name,
                "automation_id": format!("{}Button", name),
                "control_type_id": 50000,
                "is_keyboard_focusable": false,
                "scan": {
                    "status": "Fail",
                    "results": [{ "rule_id": "IsKeyboardFocusable", "status": "Fail" }]
                }
            })
        })
        .collect();

    serde_json::json!({
        "version": 1,
        "root": {
            "id": 1,
            "name": window_name,
            "control_type_id": 50032,
            "children": children
        }
    })
    .to_string()
}

fn write_snapshot(dir: &Path, file: &str, window_name: &str, buttons: &[(i64, &str)]) {
    fs::write(dir.join(file), snapshot(window_name, buttons)).unwrap();
}

fn uia_issues(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("uia-issues").unwrap();
    cmd.current_dir(dir).env_remove("UIA_ISSUES_SESSION_DIR");
    cmd
}

#[test]
fn scan_lists_one_issue_per_button() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "dialog.a11ytest.json", "Dialog", &[(2, "OK"), (3, "Cancel")]);

    uia_issues(dir.path())
        .args(["scan", "dialog.a11ytest.json", "--contributions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 issues in dialog.a11ytest.json"))
        .stdout(predicate::str::contains("IsKeyboardFocusable:Fail"))
        .stdout(predicate::str::contains("Name=Cancel"))
        .stdout(predicate::str::contains("Name=OK"));
}

#[test]
fn scan_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    uia_issues(dir.path())
        .args(["scan", "missing.a11ytest.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn merge_is_idempotent_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "dialog.a11ytest.json", "Dialog", &[(2, "OK"), (3, "Cancel")]);

    uia_issues(dir.path())
        .args(["merge", "dialog.a11ytest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 2 issues merged, 2 issues in session",
        ));

    assert!(dir.path().join(".uia-issues/session.json").exists());

    uia_issues(dir.path())
        .args(["merge", "dialog.a11ytest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 0 issues merged, 2 issues in session",
        ));
}

#[test]
fn same_defect_in_two_files_merges_into_one_issue() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("scans")).unwrap();
    write_snapshot(&dir.path().join("scans"), "monday.a11ytest.json", "Editor - a.txt", &[(2, "OK")]);
    write_snapshot(&dir.path().join("scans"), "tuesday.a11ytest.json", "Editor - b.txt", &[(40, "OK")]);

    uia_issues(dir.path())
        .args(["merge", "--results-dir", "scans"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 2 issues merged, 1 issues in session",
        ));

    uia_issues(dir.path())
        .args(["report", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 issues to out"))
        .stdout(predicate::str::contains("Locations: 2"))
        .stdout(predicate::str::contains("IsKeyboardFocusable:Fail: 1"));

    let md = fs::read_to_string(dir.path().join("out/issues.md")).unwrap();
    assert!(md.contains("monday.a11ytest.json"));
    assert!(md.contains("tuesday.a11ytest.json"));
    assert!(md.contains("| Locations | 2 |"));
}

#[test]
fn same_file_spelled_differently_merges_once() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "dialog.a11ytest.json", "Dialog", &[(2, "OK")]);

    uia_issues(dir.path())
        .args(["merge", "dialog.a11ytest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 1 of 1 issues"));

    uia_issues(dir.path())
        .args(["merge", "./dialog.a11ytest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Merged 0 of 1 issues from ./dialog.a11ytest.json (merged before)",
        ))
        .stdout(predicate::str::contains(
            "Total: 0 issues merged, 1 issues in session",
        ));
}

#[test]
fn dry_run_does_not_save() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "dialog.a11ytest.json", "Dialog", &[(2, "OK")]);

    uia_issues(dir.path())
        .args(["merge", "--dry-run", "dialog.a11ytest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 issues merged"));

    assert!(!dir.path().join(".uia-issues/session.json").exists());
}

#[test]
fn unreadable_file_fails_after_merging_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "good.a11ytest.json", "Dialog", &[(2, "OK")]);
    fs::write(dir.path().join("bad.a11ytest.json"), "{").unwrap();

    uia_issues(dir.path())
        .args(["merge", "good.a11ytest.json", "bad.a11ytest.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Total: 1 issues merged"));

    assert!(dir.path().join(".uia-issues/session.json").exists());
}

#[test]
fn reset_discards_session() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path(), "dialog.a11ytest.json", "Dialog", &[(2, "OK")]);

    uia_issues(dir.path())
        .args(["merge", "dialog.a11ytest.json"])
        .assert()
        .success();

    uia_issues(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset"));

    uia_issues(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No session to reset"));
}

#[test]
fn schema_describes_config() {
    let dir = tempfile::tempdir().unwrap();
    uia_issues(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("results_dir"))
        .stdout(predicate::str::contains("session_dir"));
}
