use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

fn netaudit() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn test_help_lists_flags() {
    netaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--no-sudo"))
        .stdout(contains("--log-file"))
        .stdout(contains("--config"));
}

#[test]
fn test_missing_dependencies_stop_before_menu() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit_network.log");

    netaudit()
        .env("PATH", "")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("1\n8\n")
        .assert()
        .failure()
        .stdout(contains("Missing dependencies: ip, ss, ufw, docker"))
        .stdout(contains("Cannot continue due to missing dependencies."))
        .stdout(contains("1. List network interfaces").not());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains(" - INFO - Starting network configuration audit"));
    assert!(log.contains(" - ERROR - Missing dependencies: ip, ss, ufw, docker"));
}

#[test]
fn test_menu_with_config_and_invalid_choice() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("session.log");
    let config_path = dir.path().join("netaudit.yaml");
    fs::write(
        &config_path,
        format!(
            "log_file: {}\nrequired_programs: []\n",
            log_path.display()
        ),
    )
    .unwrap();

    netaudit()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("9\n8\n")
        .assert()
        .success()
        .stdout(contains("8. Exit"))
        .stdout(contains("Invalid choice. Please try again."))
        .stdout(contains("Exiting."));

    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with(" - INFO - Network configuration audit completed"));
}

#[test]
fn test_missing_executable_does_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("session.log");
    let config_path = dir.path().join("netaudit.json");
    fs::write(&config_path, r#"{"required_programs": []}"#).unwrap();

    netaudit()
        .env("PATH", "")
        .arg("-c")
        .arg(&config_path)
        .arg("-l")
        .arg(&log_path)
        .write_stdin("3\n8\n")
        .assert()
        .success()
        .stdout(contains("ip is not installed"))
        .stdout(contains("Exiting."));

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains(" - ERROR - ip is not installed"));
}

#[test]
fn test_unsupported_config_format() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("netaudit.toml");
    fs::write(&config_path, "use_sudo = false\n").unwrap();

    netaudit()
        .arg("--config")
        .arg(&config_path)
        .arg("--log-file")
        .arg(dir.path().join("unused.log"))
        .assert()
        .failure()
        .stderr(contains("Unsupported file format"));
}
