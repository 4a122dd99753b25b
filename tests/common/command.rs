use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Commit date used by every commit made through [`gitlet_commit`]
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

/// [`COMMIT_DATE`] as printed by `log`
pub const READABLE_COMMIT_DATE: &str = "Sun Jan 1 12:00:00 2023 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir()
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with `1.txt` and `a/2.txt` committed on master
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));

    gitlet_add(dir, "1.txt").assert().success();
    gitlet_add(dir, "a/2.txt").assert().success();
    gitlet_commit(dir, "Initial files").assert().success();

    init_repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_add(dir: &Path, path: &str) -> Command {
    run_gitlet_command(dir, &["add", path])
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_gitlet_command(dir, &["commit", message]);
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Id of the commit the current branch points at
pub fn get_head_commit_id(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".gitlet").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    let ref_path = head_content
        .strip_prefix("ref: ")
        .ok_or("HEAD does not name a branch")?;
    let commit_id = std::fs::read_to_string(dir.join(".gitlet").join(ref_path.trim()))?;

    Ok(commit_id.trim().to_string())
}

pub fn get_branch_commit_id(
    dir: &Path,
    branch: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let commit_id = std::fs::read_to_string(
        dir.join(".gitlet").join("refs").join("heads").join(branch),
    )?;

    Ok(commit_id.trim().to_string())
}

/// Commit ids printed by `log`, newest first
pub fn get_log_commit_ids(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = run_gitlet_command(dir, &["log"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    Ok(stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect())
}

/// Expected `log` entry for one commit
pub fn log_entry(commit_id: &str, date: &str, message: &str) -> String {
    format!("===\ncommit {commit_id}\nDate: {date}\n{message}\n\n")
}
