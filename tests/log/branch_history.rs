use crate::common::command::{
    READABLE_COMMIT_DATE, committed_repository_dir, get_branch_commit_id, get_head_commit_id,
    get_log_commit_ids, gitlet_add, gitlet_commit, init_repository_dir, log_entry,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

const ROOT_DATE: &str = "Thu Jan 1 00:00:00 1970 +0000";

#[rstest]
fn log_of_fresh_repository_shows_root_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let root = get_head_commit_id(dir)?;

    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(log_entry(&root, ROOT_DATE, "initial commit"));

    Ok(())
}

#[rstest]
fn log_walks_first_parents_newest_first(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    gitlet_add(dir, "1.txt").assert().success();
    gitlet_commit(dir, "Translate first file").assert().success();
    let second = get_head_commit_id(dir)?;

    let root = get_log_commit_ids(dir)?
        .pop()
        .ok_or("log printed no commits")?;

    let expected = [
        log_entry(&second, READABLE_COMMIT_DATE, "Translate first file"),
        log_entry(&first, READABLE_COMMIT_DATE, "Initial files"),
        log_entry(&root, ROOT_DATE, "initial commit"),
    ]
    .concat();

    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(expected);

    assert_eq!(get_branch_commit_id(dir, "master")?, second);
    Ok(())
}

#[rstest]
fn log_follows_current_branch_only(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let master_head = get_head_commit_id(dir)?;

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    write_file(FileSpec::new(dir.join("master.txt"), "m".to_string()));
    gitlet_add(dir, "master.txt").assert().success();
    gitlet_commit(dir, "Master only").assert().success();

    run_gitlet_command(dir, &["checkout", "side"]).assert().success();

    let output = run_gitlet_command(dir, &["log"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with(&format!("===\ncommit {master_head}\n")));
    assert!(!stdout.contains("Master only"));

    Ok(())
}
