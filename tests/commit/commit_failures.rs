use crate::common::command::{
    get_head_commit_id, gitlet_add, gitlet_commit, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_without_changes_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let root = get_head_commit_id(dir)?;

    gitlet_commit(dir, "Nothing")
        .assert()
        .failure()
        .stderr(predicate::str::diff("No changes added to the commit.\n"));

    assert_eq!(get_head_commit_id(dir)?, root);
    Ok(())
}

#[rstest]
#[case::empty_message(&["commit", ""])]
#[case::missing_message(&["commit"])]
fn commit_without_message_fails(init_repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    gitlet_add(dir, "a.txt").assert().success();

    run_gitlet_command(dir, args)
        .assert()
        .failure()
        .stderr(predicate::str::diff("Please enter a commit message.\n"));
}

#[rstest]
fn empty_message_is_reported_before_missing_changes(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["commit", ""])
        .assert()
        .failure()
        .stderr(predicate::str::diff("Please enter a commit message.\n"));
}
