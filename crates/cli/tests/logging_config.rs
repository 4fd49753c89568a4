use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file_on_add() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("marksplice.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        root.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();
    fs::write(root.join("Inbox.md"), "# Inbox\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("msp"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["add", "Inbox", "--section", "# Inbox", "--text", "hello"])
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("note updated"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
level = "TRACE"
"#,
        root.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("msp"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}
