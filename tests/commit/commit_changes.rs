use crate::common::command::{
    committed_repository_dir, get_head_commit_id, get_log_commit_ids, gitlet_add, gitlet_commit,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_advances_current_branch(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let parent = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("3.txt"), "three".to_string()));
    gitlet_add(dir, "3.txt").assert().success();
    gitlet_commit(dir, "Add third file").assert().success().stdout("");

    let head = get_head_commit_id(dir)?;
    assert_ne!(head, parent);
    assert_eq!(get_log_commit_ids(dir)?[..2].to_vec(), vec![head, parent]);

    Ok(())
}

#[rstest]
fn commit_records_content_from_add_time(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "staged".to_string()));
    gitlet_add(dir, "1.txt").assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "after add".to_string()));
    gitlet_commit(dir, "Stage then edit").assert().success();

    run_gitlet_command(dir, &["checkout", "--", "1.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("1.txt")), "staged");

    Ok(())
}

#[rstest]
fn commit_drops_removed_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm", "a/2.txt"]).assert().success();
    gitlet_commit(dir, "Remove second file").assert().success();

    write_file(FileSpec::new(dir.join("a/2.txt"), "back".to_string()));
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("=== Untracked Files ===\na/2.txt\n"));

    Ok(())
}

#[rstest]
fn commit_clears_staging_area(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("3.txt"), "three".to_string()));
    gitlet_add(dir, "3.txt").assert().success();
    gitlet_commit(dir, "Third").assert().success();

    gitlet_commit(dir, "Nothing new")
        .assert()
        .failure()
        .stderr("No changes added to the commit.\n");
}
