use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_linesman")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("linesman-{name}-{stamp}.{extension}"))
}

const ROSTER_FIXTURE: &str = r#"[
    {"row_id":"r1","player_id":"c1","team_id":"TOR","date":"2026-01-05",
     "positions":"C","daily_slot":"C","games_played":1,"games_started":1,"rating":4.5},
    {"row_id":"r2","player_id":"lw1","team_id":"TOR","date":"2026-01-05",
     "positions":"LW","daily_slot":"Bench","games_played":1,"rating":3.0}
]"#;

#[test]
fn missing_command_prints_usage_and_exits_2() {
    let output = Command::new(bin()).output().expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: linesman"));
}

#[test]
fn optimize_command_dispatches_and_emits_json() {
    let path = unique_temp_path("optimize", "json");
    fs::write(&path, ROSTER_FIXTURE).expect("fixture should be written");

    let output = Command::new(bin())
        .args(["optimize", path.to_string_lossy().as_ref()])
        .output()
        .expect("optimize should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("optimize should emit json");
    assert_eq!(payload["results"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["results"][0]["full_pos"], "C1");

    let _ = fs::remove_file(path);
}

#[test]
fn optimize_command_requires_a_path() {
    let output = Command::new(bin()).arg("optimize").output().expect("optimize should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: linesman optimize"));
}

#[test]
fn import_command_requires_a_path() {
    let output = Command::new(bin()).arg("import").output().expect("import should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: linesman import"));
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let path = unique_temp_path("invalid-records", "json");
    fs::write(
        &path,
        r#"[{"row_id":"","player_id":"","team_id":"TOR","date":"2026-01-05"}]"#,
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_passes_clean_data() {
    let path = unique_temp_path("valid-records", "json");
    fs::write(&path, ROSTER_FIXTURE).expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));

    let _ = fs::remove_file(path);
}

#[test]
fn batch_dry_run_emits_a_summary_without_writing() {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("linesman-batch-cli-{stamp}"));
    fs::create_dir_all(&dir).expect("store dir should be created");
    let sheet = format!("{{\"records\":{ROSTER_FIXTURE}}}");
    fs::write(dir.join("2026.json"), &sheet).expect("sheet should be written");

    let output = Command::new(bin())
        .args(["batch", "2026", "--store", dir.to_string_lossy().as_ref(), "--dry-run"])
        .output()
        .expect("batch should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("summary should be json");
    assert_eq!(summary["dry_run"], true);
    assert_eq!(summary["updated_rows"], 0);
    assert_eq!(summary["groups"], 1);

    let reloaded = fs::read_to_string(dir.join("2026.json")).expect("sheet should still exist");
    assert_eq!(reloaded, sheet, "dry run must leave the sheet untouched");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn export_command_writes_a_csv() {
    let source = unique_temp_path("export-src", "json");
    let target = unique_temp_path("export-out", "csv");
    fs::write(&source, ROSTER_FIXTURE).expect("fixture should be written");

    let output = Command::new(bin())
        .args([
            "export",
            source.to_string_lossy().as_ref(),
            target.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(0));
    let csv = fs::read_to_string(&target).expect("csv should exist");
    assert!(csv.starts_with("date,team,player_id"));
    assert!(csv.contains("c1"));

    let _ = fs::remove_file(source);
    let _ = fs::remove_file(target);
}
