use crate::common::command::{
    committed_repository_dir, get_head_commit_id, gitlet_add, gitlet_commit, run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn global_log_lists_commits_from_every_branch(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    write_file(FileSpec::new(dir.join("master.txt"), "m".to_string()));
    gitlet_add(dir, "master.txt").assert().success();
    gitlet_commit(dir, "On master").assert().success();
    let master_head = get_head_commit_id(dir)?;

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    write_file(FileSpec::new(dir.join("side.txt"), "s".to_string()));
    gitlet_add(dir, "side.txt").assert().success();
    gitlet_commit(dir, "On side").assert().success();
    let side_head = get_head_commit_id(dir)?;

    let output = run_gitlet_command(dir, &["global-log"]).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let commit_ids = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .collect::<Vec<_>>();
    assert_eq!(commit_ids.len(), 4);
    assert_eq!(commit_ids[..2].to_vec(), vec![side_head.as_str(), master_head.as_str()]);

    let messages = stdout
        .split("===\n")
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.lines().nth(2))
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        vec!["On side", "On master", "Initial files", "initial commit"]
    );

    Ok(())
}

#[rstest]
fn global_log_keeps_commits_left_behind_by_reset(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("later.txt"), "l".to_string()));
    gitlet_add(dir, "later.txt").assert().success();
    gitlet_commit(dir, "Later").assert().success();
    run_gitlet_command(dir, &["reset", &first]).assert().success();

    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Later").not());
    run_gitlet_command(dir, &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Later\n"));

    Ok(())
}
