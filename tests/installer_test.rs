use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn install(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("goto-install").unwrap();
    cmd.env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("HOME", temp.path())
        .env("SHELL", "/bin/zsh")
        .env("NO_COLOR", "1")
        .env_remove("GOTO_INSTALL_DIR")
        .env_remove("GOTO_RESOLVER");
    cmd
}

#[test]
#[serial]
fn test_install_links_binaries_and_runs_setup() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("nested/bin");

    install(&temp)
        .arg(&dest)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked"))
        .stdout(predicate::str::contains("eval \"$(command goto --init zsh)\""))
        .stderr(predicate::str::contains("is not on your PATH"));

    assert_eq!(fs::read_link(dest.join("goto")).unwrap(), cargo_bin("goto"));
    assert_eq!(
        fs::read_link(dest.join("goto-launch")).unwrap(),
        cargo_bin("goto-launch")
    );
    assert!(temp.path().join("config/goto/config.toml").is_file());
}

#[test]
#[serial]
fn test_reinstall_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("bin");

    install(&temp).arg(&dest).arg("--no-setup").assert().success();
    install(&temp)
        .arg(&dest)
        .arg("--no-setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));

    assert_eq!(fs::read_link(dest.join("goto")).unwrap(), cargo_bin("goto"));
}

#[test]
#[serial]
fn test_install_dir_from_env() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("from-env");

    install(&temp)
        .env("GOTO_INSTALL_DIR", &dest)
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("aborting"));

    assert!(dest.join("goto-launch").exists());
    assert!(!temp.path().join("config/goto").exists());
}

#[test]
#[serial]
fn test_missing_source_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let lonely = temp.path().join("lonely");
    fs::create_dir_all(&lonely).unwrap();
    let installer = lonely.join("goto-install");
    fs::copy(cargo_bin("goto-install"), &installer).unwrap();
    let dest = temp.path().join("bin");

    Command::new(&installer)
        .arg(&dest)
        .env("NO_COLOR", "1")
        .env_remove("GOTO_INSTALL_DIR")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing"));

    assert!(!dest.exists());
}
