mod common;

use common::{run_soapnote, TestEnv};
use serde_json::Value;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({})\nstdout:\n{}\nstderr:\n{}",
            e,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[test]
fn soapnote_help_shows_usage() {
    let output = run_soapnote(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("generate"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn soapnote_version_shows_version() {
    let output = run_soapnote(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("soapnote "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_soapnote(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("soapnote"));
}

#[test]
fn config_show_prints_defaults() {
    let output = run_soapnote(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("gemini-1.5-pro"));
}

#[test]
fn config_show_masks_api_key() {
    let env = TestEnv::new();
    env.write_config("[llm]\napi_key = \"super-secret-key\"\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("super-secret-key"));
    assert!(stdout.contains("********"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_soapnote(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(
        first.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn generate_blank_transcript_short_circuits() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["generate", "--compact"], "   \n");

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "soap": {
                "subjective": "No transcript provided",
                "objective": "",
                "assessment": "",
                "plan": ""
            },
            "medicalTerms": {}
        })
    );
}

#[test]
fn generate_without_api_key_keeps_transcript() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["generate"], "Patient reports headache for 3 days.\n");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["soap"]["subjective"], "Patient reports headache for 3 days.");
    assert_eq!(json["soap"]["plan"], "");
    assert_eq!(json["medicalTerms"], serde_json::json!({}));
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Gemini API key not set"));
}

#[test]
fn generate_reports_unreachable_upstream_in_error_field() {
    let env = TestEnv::new();
    env.write_config(
        "[llm]\napi_key = \"test-key\"\nendpoint = \"http://127.0.0.1:9/v1beta\"\ntimeout_secs = 5\n",
    );

    let output = env.run_with_stdin(&["generate"], "Rash on left forearm.");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["soap"]["subjective"], "Rash on left forearm.");
    assert!(json["error"].as_str().unwrap().starts_with("HTTP error"));
}

#[test]
fn generate_reports_missing_file() {
    let output = run_soapnote(&["generate", "/definitely/not/here.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read transcript"));
}
