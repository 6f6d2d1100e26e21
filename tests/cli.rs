//! Tests for the `whilebool` binary.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn whilebool() -> Command {
    let mut cmd = Command::cargo_bin("whilebool").expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn valid_file_prints_statistics() {
    let file = source_file("while(a==1){b}");

    let output = whilebool().arg(file.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("The file matches the expected statement(s)!\n"));
    assert!(stdout.contains("Distinct variables (single letter): 2\n"));
    assert!(stdout.contains("Single-digit constants: 1\n"));
    assert!(stdout.contains("Comparison operators: 1\n"));
    assert!(stdout.contains("'while' statements: 1\n"));
}

#[test]
fn invalid_file_prints_verdict_and_diagnostic() {
    let file = source_file("while (x < 5) { y");

    let output = whilebool().arg(file.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout, "The expression to parse is incorrect.\n");
    assert!(stderr.contains("error[E0001]: expected '}' to close the block, found end of input"));
    assert!(stderr.contains(":1:19"));
}

#[test]
fn reads_stdin_when_no_file_is_given() {
    let output = whilebool().write_stdin("(a && b) || !c").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let output = whilebool().arg("-").write_stdin("a +").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("<stdin>:1:3"));
}

#[test]
fn json_format_reports_structured_error() {
    let output = whilebool()
        .args(["--format", "json"])
        .write_stdin("while x")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["error"]["expected"], "l_paren_after_while");
    assert_eq!(value["error"]["found"]["lexeme"], "x");
}

#[test]
fn strict_keywords_flag_changes_the_verdict() {
    whilebool().write_stdin("whiletrue").assert().code(1);
    whilebool()
        .arg("--strict-keywords")
        .write_stdin("whiletrue")
        .assert()
        .code(0);
}

#[test]
fn config_file_is_applied_and_flags_override_it() {
    let config = source_file(r#"{ "strict_keywords": true, "format": "json" }"#);

    let output = whilebool()
        .arg("--config")
        .arg(config.path())
        .write_stdin("iffy")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], true);

    let output = whilebool()
        .arg("--config")
        .arg(config.path())
        .args(["--format", "text"])
        .write_stdin("iffy")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("The file matches the expected statement(s)!"));
}

#[test]
fn tokens_flag_lists_tokens() {
    let output = whilebool()
        .arg("--tokens")
        .write_stdin("x <= 1")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Identifier \"x\""));
    assert!(stdout.contains("Le \"<=\""));
    assert!(stdout.contains("Number \"1\""));
}

#[test]
fn missing_file_exits_with_two() {
    let output = whilebool().arg("/no/such/file.txt").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot read '/no/such/file.txt'"));
}

#[test]
fn bad_config_exits_with_two() {
    let config = source_file("{ not json");
    whilebool()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x")
        .assert()
        .code(2);
}
