//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `gradebook` command isolated from any config on the host.
fn gradebook(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GRADEBOOK_COURSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_prints_entities() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Students ==="))
        .stdout(predicate::str::contains(
            "Name: Ivan\nSurname: Ivanov\nAverage homework grade: 9.5\n\
             Courses in progress: Python, JavaScript\nFinished courses: Git",
        ))
        .stdout(predicate::str::contains(
            "Name: Oleg\nSurname: Bulygin\nAverage lecture grade: 8",
        ))
        .stdout(predicate::str::contains("Name: Elena\nSurname: Sidorova"));
}

#[test]
fn demo_prints_comparisons_and_averages() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Is lecturer Oleg Bulygin better than lecturer Timur Anvartdinov? false",
        ))
        .stdout(predicate::str::contains("Lecturer averages: 8 and 10"))
        .stdout(predicate::str::contains(
            "Is student Ivan Ivanov better than student Petr Petrov? true",
        ))
        .stdout(predicate::str::contains("Student averages: 9.5 and 8.5"))
        .stdout(predicate::str::contains(
            "Average homework grade for Python across students: 8.5",
        ))
        .stdout(predicate::str::contains(
            "Average lecture grade for Python across lecturers: 9",
        ));
}

#[test]
fn demo_logs_rejected_ratings_to_stderr() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("rating not recorded").not())
        .stderr(predicate::str::contains("rating not recorded"));
}

#[test]
fn demo_course_override() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["demo", "--course", "Git"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Average homework grade for Git across students: 9",
        ))
        .stdout(predicate::str::contains(
            "Average lecture grade for Git across lecturers: 0",
        ));
}

#[test]
fn demo_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "course_separator = \" | \"\nreport_course = \"JavaScript\"\n").unwrap();

    gradebook(&dir)
        .arg("demo")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Courses in progress: Python | JavaScript",
        ))
        .stdout(predicate::str::contains(
            "Average homework grade for JavaScript across students: 10",
        ));
}

#[test]
fn demo_env_course_override() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .env("GRADEBOOK_COURSE", "JavaScript")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Average lecture grade for JavaScript across lecturers: 0",
        ));
}

#[test]
fn demo_json_output() {
    let dir = TempDir::new().unwrap();

    let output = gradebook(&dir)
        .args(["demo", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["students"].as_array().unwrap().len(), 2);
    assert_eq!(json["lecturers"][1]["average_grade"], 10.0);

    let python = json["courses"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["course"] == "Python")
        .unwrap();
    assert_eq!(python["homework_average"], 8.5);
    assert_eq!(python["lecture_average"], 9.0);
}

#[test]
fn demo_markdown_output() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["demo", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gradebook Report"))
        .stdout(predicate::str::contains("| Python | 8.5 | 2 | 9 | 2 |"));
}

#[test]
fn demo_unknown_format_fails() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["demo", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: unknown format: xml"));
}

#[test]
fn demo_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["demo", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"));

    assert!(dir.path().join("gradebook.toml").exists());

    // The written config is picked up from the working directory.
    gradebook(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("for Python across students"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir).arg("init").assert().success();

    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}
