use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::tempdir;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

const SAMPLE_ROUND: &str = "\
(Adam, HEALTHY)
(Cure0, CURE)
(Cure1, CURE)
(Charlie, SICK)
(Vaccine, DYING)
(Darlene, DEAD)
(Emma, HEALTHY)
(Cure2, CURE)
(Bob, HEALTHY)
(Alice, DEAD)
";

#[test]
fn test_run_sample_listing() {
    cargo_bin_cmd!("runner_test_meetup")
        .assert()
        .success()
        .stdout(SAMPLE_ROUND);
}

#[test]
fn test_run_csv_input_matches_sample() {
    cargo_bin_cmd!("runner_test_meetup")
        .arg("--input")
        .arg(data_path("agents.csv"))
        .assert()
        .success()
        .stdout(SAMPLE_ROUND);
}

#[test]
fn test_run_json_input_with_unpaired_agent() {
    cargo_bin_cmd!("runner_test_meetup")
        .arg("-i")
        .arg(data_path("odd_agents.json"))
        .assert()
        .success()
        .stdout("(Frank, DYING)\n(Gina, DYING)\n(Hal, DYING)\n(Bob, HEALTHY)\n");
}

#[test]
fn test_invalid_category_fails() {
    let output = cargo_bin_cmd!("runner_test_meetup")
        .arg("--input")
        .arg(data_path("bad_agents.csv"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid health category: \"ZOMBIE\""));
}

#[test]
fn test_output_file_and_overwrite() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("reports").join("round.csv");

    cargo_bin_cmd!("runner_test_meetup")
        .arg("--quiet")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.starts_with("name,category\nAdam,HEALTHY\nCure0,CURE\n"));
    assert!(written.ends_with("Bob,HEALTHY\nAlice,DEAD\n"));

    // A second run refuses to clobber the report...
    cargo_bin_cmd!("runner_test_meetup")
        .arg("--quiet")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .failure();

    // ...unless asked to.
    cargo_bin_cmd!("runner_test_meetup")
        .arg("--quiet")
        .arg("--overwrite")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();
}

#[test]
fn test_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    let output_path = temp_dir.path().join("round.csv");
    let config = format!(
        r#"{{"input": {:?}, "output": {:?}}}"#,
        data_path("odd_agents.json").display().to_string(),
        output_path.display().to_string()
    );
    std::fs::write(&config_path, config).unwrap();

    cargo_bin_cmd!("runner_test_meetup")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("(Frank, DYING)\n(Gina, DYING)\n(Hal, DYING)\n(Bob, HEALTHY)\n");
    assert!(output_path.exists());
}

#[test]
fn test_verbosity_levels() {
    // `-v`
    let output = cargo_bin_cmd!("runner_test_meetup")
        .arg("-v")
        .arg("--quiet")
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Round complete: 10 agents, 3 cured pairs, 1 worsened pairs"));
    assert!(!stderr.contains("meetup round over 10 agents"));

    // `-vv`
    let output = cargo_bin_cmd!("runner_test_meetup")
        .arg("-vv")
        .arg("--quiet")
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("meetup round over 10 agents"));
    assert!(!stderr.contains("meeting of"));

    // `-vvv`
    let output = cargo_bin_cmd!("runner_test_meetup")
        .arg("-vvv")
        .arg("--quiet")
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("meeting of (Vaccine, SICK) and (Darlene, DYING)"));
}

#[test]
fn test_run_with_logging_modules() {
    let output = cargo_bin_cmd!("runner_test_meetup")
        .arg("--log-level")
        .arg("meetup::meetup=Trace")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    // Logging never mixes into the printed listing.
    assert_eq!(stdout, SAMPLE_ROUND);
    assert!(stderr.contains("meetup::meetup - meeting of (Adam, SICK) and (Cure0, CURE)"));
    // Only `meetup::meetup` was enabled.
    assert!(!stderr.contains("meetup::runner"));
}
