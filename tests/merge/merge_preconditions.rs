use crate::common::command::{
    committed_repository_dir, get_head_commit_id, gitlet_add, gitlet_commit, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn branched_repository_dir(committed_repository_dir: TempDir) -> TempDir {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    run_gitlet_command(dir, &["checkout", "side"]).assert().success();
    write_file(FileSpec::new(dir.join("side.txt"), "side".to_string()));
    gitlet_add(dir, "side.txt").assert().success();
    gitlet_commit(dir, "Side").assert().success();
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    committed_repository_dir
}

#[rstest]
fn merge_with_pending_changes_fails(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir.path();
    write_file(FileSpec::new(dir.join("pending.txt"), "p".to_string()));
    gitlet_add(dir, "pending.txt").assert().success();

    run_gitlet_command(dir, &["merge", "side"])
        .assert()
        .failure()
        .stderr(predicate::str::diff("You have uncommitted changes.\n"));
}

#[rstest]
fn merge_with_pending_removal_fails(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir.path();
    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::diff("You have uncommitted changes.\n"));
}

#[rstest]
fn merge_unknown_branch_fails(branched_repository_dir: TempDir) {
    run_gitlet_command(branched_repository_dir.path(), &["merge", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::diff(
            "A branch with that name does not exist.\n",
        ));
}

#[rstest]
fn merge_with_itself_fails(branched_repository_dir: TempDir) {
    run_gitlet_command(branched_repository_dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::diff("Cannot merge a branch with itself.\n"));
}

#[rstest]
fn merge_refuses_untracked_file_in_the_way(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir.path();
    write_file(FileSpec::new(dir.join("side.txt"), "mine".to_string()));

    run_gitlet_command(dir, &["merge", "side"])
        .assert()
        .failure()
        .stderr(predicate::str::diff(
            "There is an untracked file in the way; delete it or add it first.\n",
        ));

    assert_eq!(read_file(&dir.join("side.txt")), "mine");
}

#[rstest]
fn merge_with_clean_tree_changes_nothing(
    branched_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = branched_repository_dir.path();
    let head = get_head_commit_id(dir)?;

    run_gitlet_command(dir, &["merge", "side"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(get_head_commit_id(dir)?, head);
    assert!(!dir.join("side.txt").exists());
    Ok(())
}
