use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use lionfish_population_analyzer::{
    io::write_csv,
    models::{Fish, LengthSurvey, Sample},
};

/// Create a test survey and write it to a CSV file in the given directory.
fn create_test_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("test_survey.csv");
    let survey = sample_survey();
    write_csv(&survey, &path).unwrap();
    path
}

fn sample_survey() -> LengthSurvey {
    let mut survey = LengthSurvey::new("CLI Test");

    survey.samples.push(Sample {
        sample_id: 1,
        month: 4,
        year: 2013,
        site: Some("Reef A".to_string()),
        depth_m: Some(24.0),
        fish: [152.0, 178.0, 191.0, 213.0, 247.0]
            .iter()
            .enumerate()
            .map(|(i, &l)| Fish {
                fish_id: i as u32 + 1,
                sample_id: 1,
                total_length_mm: l,
                weight_g: None,
            })
            .collect(),
    });
    survey.samples.push(Sample {
        sample_id: 2,
        month: 7,
        year: 2013,
        site: None,
        depth_m: None,
        fish: [163.0, 188.0, 224.0, 271.0]
            .iter()
            .enumerate()
            .map(|(i, &l)| Fish {
                fish_id: i as u32 + 1,
                sample_id: 2,
                total_length_mm: l,
                weight_g: None,
            })
            .collect(),
    });
    survey
}

fn cmd() -> Command {
    Command::cargo_bin("lionfish-analyzer").unwrap()
}

// --- Analyze subcommand ---

#[test]
fn test_analyze_success() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args(["analyze", "--input", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fish Measured"))
        .stdout(predicate::str::contains("Mean Total Length"));
}

#[test]
fn test_analyze_custom_confidence() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--confidence",
            "0.90",
        ])
        .assert()
        .success();
}

#[test]
fn test_analyze_custom_class_width() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--class-width",
            "25.0",
        ])
        .assert()
        .success();
}

// --- Growth subcommand ---

#[test]
fn test_growth_table() {
    cmd()
        .args(["growth", "--max-age", "5", "--steps-per-year", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted Length at Age"))
        .stdout(predicate::str::contains("Age (yr)"));
}

#[test]
fn test_growth_custom_curve() {
    cmd()
        .args([
            "growth",
            "--l-inf",
            "400.0",
            "--k",
            "0.5",
            "--c",
            "0.0",
            "--max-age",
            "3",
        ])
        .assert()
        .success();
}

#[test]
fn test_growth_invalid_curve() {
    cmd()
        .args(["growth", "--l-inf=-400.0"])
        .assert()
        .failure();
}

// --- Project subcommand ---

#[test]
fn test_project_success() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "project",
            "--input",
            csv_path.to_str().unwrap(),
            "--month",
            "4",
            "--year",
            "2013",
            "--mortality",
            "0.5",
            "--recruitment",
            "100",
            "--horizon",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cohort Projection"))
        .stdout(predicate::str::contains("Total Fish"));
}

#[test]
fn test_project_with_histogram() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "project",
            "--input",
            csv_path.to_str().unwrap(),
            "--month",
            "4",
            "--year",
            "2013",
            "--histogram",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cohort Size Structure"));
}

#[test]
fn test_project_steady_state() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "project",
            "--input",
            csv_path.to_str().unwrap(),
            "--month",
            "4",
            "--year",
            "2013",
            "--scale",
            "10.0",
            "--mortality",
            "0.5",
            "--horizon",
            "3",
            "--steady-state",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Steady-State Recruitment"))
        .stdout(predicate::str::contains("Required recruitment"));
}

#[test]
fn test_project_scenarios() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let toml_path = dir.path().join("scenarios.toml");
    std::fs::write(
        &toml_path,
        r#"
            [[scenario]]
            name = "baseline"
            mortality_rate = 0.5
            recruitment = 100.0
            bucket_width_mm = 10.0
            horizon = 3

            [[scenario]]
            name = "culled"
            mortality_rate = 1.2
            recruitment = 100.0
            bucket_width_mm = 10.0
            horizon = 3
        "#,
    )
    .unwrap();

    cmd()
        .args([
            "project",
            "--input",
            csv_path.to_str().unwrap(),
            "--month",
            "4",
            "--year",
            "2013",
            "--scenarios",
            toml_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario Comparison"))
        .stdout(predicate::str::contains("baseline"))
        .stdout(predicate::str::contains("culled"));
}

#[test]
fn test_project_missing_month() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "project",
            "--input",
            csv_path.to_str().unwrap(),
            "--month",
            "12",
            "--year",
            "2013",
        ])
        .assert()
        .failure();
}

// --- Convert subcommand ---

#[test]
fn test_convert_csv_to_json() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let json_path = dir.path().join("output.json");

    cmd()
        .args([
            "convert",
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success"));

    assert!(json_path.exists());
}

#[test]
fn test_convert_csv_to_excel() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let xlsx_path = dir.path().join("output.xlsx");

    cmd()
        .args([
            "convert",
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            xlsx_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(xlsx_path.exists());
}

#[test]
fn test_convert_unsupported_output() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let txt_path = dir.path().join("output.txt");

    cmd()
        .args([
            "convert",
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            txt_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

// --- Summary subcommand ---

#[test]
fn test_summary_success() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args(["summary", "--input", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Summary"))
        .stdout(predicate::str::contains("Sampling Events"))
        .stdout(predicate::str::contains("Fish Measured"));
}

// --- Error cases ---

#[test]
fn test_missing_file() {
    cmd()
        .args(["analyze", "--input", "nonexistent.csv"])
        .assert()
        .failure();
}

#[test]
fn test_no_subcommand() {
    cmd().assert().failure();
}

#[test]
fn test_missing_input_flag() {
    cmd().args(["analyze"]).assert().failure();
}

// --- Help and version ---

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lionfish Population Analyzer"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lionfish-analyzer"));
}
