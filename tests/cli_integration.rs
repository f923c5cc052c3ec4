//! Integration tests for the gitcmd binary.
//!
//! These tests exercise the full CLI against real Git repos.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running gitcmd with an isolated config.
fn gitcmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitcmd").unwrap();
    cmd.env("GITCMD_CONFIG", config_dir.join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed")
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

/// Repository on `main` with one commit and a `v1.0` tag.
fn tagged_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init"]);
    run_git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    run_git(dir.path(), &["config", "user.name", "Test User"]);
    run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
    fs::write(dir.path().join("README.md"), "# Test\n").unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
    run_git(dir.path(), &["add", "."]);
    run_git(dir.path(), &["commit", "-m", "Initial commit"]);
    run_git(dir.path(), &["tag", "v1.0"]);
    run_git(dir.path(), &["branch", "feature"]);
    dir
}

#[test]
fn version_flag_works() {
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcmd"));
}

#[test]
fn help_lists_commands() {
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("branches"))
        .stdout(predicate::str::contains("remotes"));
}

#[test]
fn tags_plain_output() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("v1.0\n");
}

#[test]
fn branches_json_output() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    let output = gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["--json", "branches"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["feature", "main"]);
}

#[test]
fn merged_branches_exclude_current() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["branches", "--merged"])
        .assert()
        .success()
        .stdout("feature\n");
}

#[test]
fn status_reports_configured_fallback_branch() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("config.toml"),
        "default_branch = \"trunk\"\n",
    )
    .unwrap();

    let output = gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["--json", "status"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["default_branch"], "trunk");
    assert_eq!(report["current_branch"], "main");
    assert_eq!(report["last_tag"], "v1.0");
    assert_eq!(report["dirty"], false);
}

#[test]
fn repo_config_applies_from_subdirectory() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    let repo_config = repo.path().join(".git/gitcmd/config.toml");
    fs::create_dir_all(repo_config.parent().unwrap()).unwrap();
    fs::write(&repo_config, "default_branch = \"trunk\"\n").unwrap();
    let sub = repo.path().join("sub/deeper");
    fs::create_dir_all(&sub).unwrap();

    for dir in [repo.path(), sub.as_path()] {
        let output = gitcmd(config.path())
            .arg("--cwd")
            .arg(dir)
            .args(["--json", "status"])
            .output()
            .unwrap();

        assert!(output.status.success(), "status failed in {:?}", dir);
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["default_branch"], "trunk", "from {:?}", dir);
        assert!(report["repo_config"]
            .as_str()
            .unwrap()
            .ends_with("gitcmd/config.toml"));
        assert!(report["global_config"].is_null());
    }
}

#[test]
fn status_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--cwd")
        .arg(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn invalid_config_is_reported() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.toml"), "remote = \"\"\n").unwrap();

    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn ignored_reports_both_answers() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();

    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["ignored", "build.log"])
        .assert()
        .success()
        .stdout("ignored\n");

    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["ignored", "README.md"])
        .assert()
        .success()
        .stdout("not ignored\n");
}

#[test]
fn ignored_fails_when_git_cannot_run() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("config.toml"),
        "binary = \"gitcmd-no-such-binary\"\n",
    )
    .unwrap();

    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .args(["ignored", "build.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to check ignore status"));
}

#[test]
fn remotes_empty_without_remotes() {
    let repo = tagged_repo();
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .arg("--cwd")
        .arg(repo.path())
        .arg("remotes")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn completion_generates_script() {
    let config = TempDir::new().unwrap();
    gitcmd(config.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcmd"));
}
