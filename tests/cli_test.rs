//! Integration tests for the rumdl-config binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn rumdl_config() -> Command {
    let mut cmd = Command::new(cargo_bin("rumdl-config"));
    cmd.env_remove("RUMDL_CONFIG_REGISTRY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

const VALID_CONFIG: &str = r#"
[global]
disable = ["MD013"]
respect_gitignore = true

[MD007]
indent = 4

[per-file-ignores]
"CHANGELOG.md" = ["MD024"]
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate rumdl configuration files"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_check_valid_config() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", VALID_CONFIG);
    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
    Ok(())
}

#[test]
fn cli_check_reports_errors() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "[rules.MD013]\nline_length = \"abc\"\n");
    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[invalid-value]"))
        .stdout(predicate::str::contains("must be a number"))
        .stdout(predicate::str::contains(".rumdl.toml:2:15"));
    Ok(())
}

#[test]
fn cli_check_syntax_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "[rules\nselect = [\"MD001\"\n");
    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[syntax-error]"))
        .stdout(predicate::str::contains("1 error(s) and 0 warning(s)"));
    Ok(())
}

#[test]
fn cli_check_warnings_and_strict() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "[bogus]\nx = 1\n");

    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[unknown-section]"));

    rumdl_config()
        .args(["check", "--strict"])
        .arg(&path)
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "[rules.MD0013]\n");
    let output = rumdl_config()
        .args(["check", "--format", "json"])
        .arg(&path)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let diag = &parsed["files"][0]["diagnostics"][0];
    assert_eq!(diag["code"], "unknown-rule");
    assert_eq!(diag["suggestion"], "MD001");
    Ok(())
}

#[test]
fn cli_check_sarif_output() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "[global]\nenable = \"MD001\"\n");
    let output = rumdl_config()
        .args(["check", "--format", "sarif"])
        .arg(&path)
        .output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["results"][0]["ruleId"], "invalid-value");
    Ok(())
}

#[test]
fn cli_check_pyproject() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(
        "pyproject.toml",
        "[project]\nname = \"demo\"\n\n[tool.rumdl]\nrespect_gitignore = \"maybe\"\n",
    );
    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be true or false"))
        .stdout(predicate::str::contains("[project]").not());
    Ok(())
}

#[test]
fn cli_check_file_with_byte_order_mark() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(
        ".rumdl.toml",
        "\u{feff}[global]\nrespect_gitignore = \"maybe\"\n",
    );
    rumdl_config()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be true or false"));
    Ok(())
}

#[test]
fn cli_check_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .args(["check", "/nonexistent/.rumdl.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
    Ok(())
}

#[test]
fn cli_check_requires_files() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config().arg("check").assert().failure();
    Ok(())
}

#[test]
fn cli_fix_applies_suggestions() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(
        ".rumdl.toml",
        "[rules]\nselect = [\"MD001\", \"MDO41\"]\n",
    );
    rumdl_config()
        .arg("fix")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("applied 1 fix(es)"));

    let fixed = fs::read_to_string(&path)?;
    assert_eq!(fixed, "[rules]\nselect = [\"MD001\", \"MD041\"]\n");
    Ok(())
}

#[test]
fn cli_explain_rule() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .args(["explain", "MD004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("style: string"));
    Ok(())
}

#[test]
fn cli_explain_unknown_rule() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .args(["explain", "MD13"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Did you mean 'MD013'?"));
    Ok(())
}

#[test]
fn cli_rules_lists_registry() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("MD013"))
        .stdout(predicate::str::contains("MD058"));
    Ok(())
}

#[test]
fn cli_custom_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let registry = temp.path().join("registry.json");
    fs::write(
        &registry,
        r#"{"tool": "rumdl", "rules": {"MD099": {"description": "Test rule"}}}"#,
    )?;
    let config = temp.path().join(".rumdl.toml");
    fs::write(&config, "[rules.MD999]\nfoo = 1\n")?;

    rumdl_config()
        .arg("check")
        .arg(&config)
        .env("RUMDL_CONFIG_REGISTRY", &registry)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Did you mean 'MD099'?"));
    Ok(())
}

#[test]
fn cli_bad_registry_is_operational_error() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .args(["rules", "--registry", "/nonexistent/registry.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load schema registry"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rumdl-config"));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = setup_file(".rumdl.toml", "");
    rumdl_config()
        .args(["check", "--debug", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::starts_with("{"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    rumdl_config().arg("lint").assert().failure();
    Ok(())
}
