use crate::common::command::{
    committed_repository_dir, gitlet_add, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_untracked_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("loose.txt"), "loose".to_string()));

    run_gitlet_command(dir, &["rm", "loose.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::diff("No reason to remove the file.\n"));

    assert!(dir.join("loose.txt").exists());
}

#[rstest]
fn rm_staged_file_only_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    gitlet_add(dir, "new.txt").assert().success();

    run_gitlet_command(dir, &["rm", "new.txt"]).assert().success();

    assert!(dir.join("new.txt").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ))
        .stdout(predicate::str::contains("=== Untracked Files ===\nnew.txt\n"));
}

#[rstest]
fn rm_tracked_file_deletes_it_and_marks_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm", "a/2.txt"]).assert().success();

    assert!(!dir.join("a").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\na/2.txt\n\n"));
}
