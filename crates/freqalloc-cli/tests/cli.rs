//! Integration tests for the `freqalloc` binary.
//!
//! Each test runs the binary inside its own temporary working directory, so
//! the default work queue and config files are resolved there.

use std::path::Path;
use std::process::{Command, Output};

use freqalloc_test::{SMALL_NETWORK_JSON, SMALL_NETWORK_TUPLE_COUNT_HEADER, SMALL_NETWORK_WCSP};
use tempfile::TempDir;

fn freqalloc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_freqalloc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run freqalloc")
}

fn workspace_with_model(json: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("network.json"), json).unwrap();
    dir
}

fn wcsp_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".wcsp"))
        .collect();
    names.sort();
    names
}

fn empty_domain_json() -> String {
    SMALL_NETWORK_JSON.replace(
        r#""delta": 3, "transmitter": [20, 30]"#,
        r#""delta": 100, "transmitter": [20, 30]"#,
    )
}

#[test]
fn test_encode_with_work_name() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(dir.path(), &["encode", "network.json", "--work-name", "net"]);

    assert!(output.status.success());
    let written = dir.path().join("FrequencyAllocationWCSP_net.wcsp");
    assert_eq!(std::fs::read_to_string(&written).unwrap(), SMALL_NETWORK_WCSP);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("FrequencyAllocationWCSP_net.wcsp"));
}

#[test]
fn test_encode_names_file_after_work_queue() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    std::fs::write(dir.path().join("wcsp_queue.txt"), "scen04\n").unwrap();

    let output = freqalloc(dir.path(), &["encode", "network.json"]);

    assert!(output.status.success());
    assert_eq!(wcsp_files(dir.path()), vec!["FrequencyAllocationWCSP_scen04.wcsp"]);
}

#[test]
fn test_encode_without_work_queue_uses_unknown() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(dir.path(), &["encode", "network.json"]);

    assert!(output.status.success());
    assert_eq!(wcsp_files(dir.path()), vec!["FrequencyAllocationWCSP_unknown.wcsp"]);
}

#[test]
fn test_encode_to_explicit_output() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(dir.path(), &["encode", "network.json", "-o", "custom.wcsp"]);

    assert!(output.status.success());
    assert_eq!(wcsp_files(dir.path()), vec!["custom.wcsp"]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("custom.wcsp")).unwrap(),
        SMALL_NETWORK_WCSP
    );
}

#[test]
fn test_encode_tuple_count_header() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(
        dir.path(),
        &["encode", "network.json", "-o", "out.wcsp", "--max-domain-size", "tuple-count"],
    );

    assert!(output.status.success());
    let text = std::fs::read_to_string(dir.path().join("out.wcsp")).unwrap();
    assert_eq!(text.lines().next(), Some(SMALL_NETWORK_TUPLE_COUNT_HEADER));
}

#[test]
fn test_encode_reads_config_from_working_directory() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    std::fs::create_dir(dir.path().join("out")).unwrap();
    std::fs::write(
        dir.path().join("freqalloc.toml"),
        "problem_name = \"Celar\"\n\n[output]\ndirectory = \"out\"\nfile_prefix = \"Celar\"\nwork_name = \"t\"\n",
    )
    .unwrap();

    let output = freqalloc(dir.path(), &["encode", "network.json"]);

    assert!(output.status.success());
    let text = std::fs::read_to_string(dir.path().join("out").join("Celar_t.wcsp")).unwrap();
    assert!(text.starts_with("Celar 4 6 5 6\n"));
}

#[test]
fn test_encode_rejects_invalid_config() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    std::fs::write(dir.path().join("bad.toml"), "max_domain_size = 3\n").unwrap();

    let output = freqalloc(dir.path(), &["--config", "bad.toml", "encode", "network.json"]);

    assert!(!output.status.success());
    assert!(wcsp_files(dir.path()).is_empty());
}

#[test]
fn test_encode_empty_domain_fails_without_output() {
    let dir = workspace_with_model(&empty_domain_json());
    let output = freqalloc(dir.path(), &["encode", "network.json", "--work-name", "bad"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(wcsp_files(dir.path()).is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("station 2 has an empty domain"));
}

#[test]
fn test_encode_unwritable_destination_fails() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(
        dir.path(),
        &["encode", "network.json", "--output-dir", "missing/dir", "--work-name", "x"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("I/O failure"));
}

#[test]
fn test_encode_missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = freqalloc(dir.path(), &["encode", "absent.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_encode_malformed_model_fails() {
    let dir = workspace_with_model("{\"stations\": 3}");
    let output = freqalloc(dir.path(), &["encode", "network.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Model parse error"));
}

#[test]
fn test_check_reports_domains_and_regions() {
    let dir = workspace_with_model(SMALL_NETWORK_JSON);
    let output = freqalloc(dir.path(), &["check", "network.json"]);

    assert!(output.status.success());
    assert!(wcsp_files(dir.path()).is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("station 2 (id 2, region 1): 3 pairs"));
    assert!(stdout.contains("region 0: 2 stations, at most 4 frequencies"));
    assert!(stdout.contains("region 1: 2 stations, at most 3 frequencies"));
}

#[test]
fn test_check_invalid_model_fails() {
    let dir = workspace_with_model(&empty_domain_json());
    let output = freqalloc(dir.path(), &["check", "network.json"]);
    assert!(!output.status.success());
}
