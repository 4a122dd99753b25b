use crate::common::command::{
    committed_repository_dir, get_branch_commit_id, get_head_commit_id, gitlet_add,
    gitlet_commit, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `side` adds `side.txt` and rewrites `1.txt`; master keeps the original files
#[fixture]
fn diverged_repository_dir(committed_repository_dir: TempDir) -> TempDir {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    run_gitlet_command(dir, &["checkout", "side"]).assert().success();

    write_file(FileSpec::new(dir.join("side.txt"), "side".to_string()));
    write_file(FileSpec::new(dir.join("1.txt"), "one on side".to_string()));
    gitlet_add(dir, "side.txt").assert().success();
    gitlet_add(dir, "1.txt").assert().success();
    gitlet_commit(dir, "Side work").assert().success();

    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    committed_repository_dir
}

#[rstest]
fn switching_branches_swaps_tracked_files(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    assert!(!dir.join("side.txt").exists());
    assert_eq!(read_file(&dir.join("1.txt")), "one");

    run_gitlet_command(dir, &["checkout", "side"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("side.txt")), "side");
    assert_eq!(read_file(&dir.join("1.txt")), "one on side");
    assert_eq!(get_head_commit_id(dir)?, get_branch_commit_id(dir, "side")?);

    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert!(!dir.join("side.txt").exists());

    Ok(())
}

#[rstest]
fn untracked_files_not_in_target_survive(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("notes.txt"), "mine".to_string()));

    run_gitlet_command(dir, &["checkout", "side"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("notes.txt")), "mine");
}

#[rstest]
fn untracked_file_in_the_way_aborts_checkout(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("side.txt"), "precious".to_string()));

    run_gitlet_command(dir, &["checkout", "side"])
        .assert()
        .failure()
        .stderr(predicate::str::diff(
            "There is an untracked file in the way; delete it or add it first.\n",
        ));

    assert_eq!(read_file(&dir.join("side.txt")), "precious");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(get_head_commit_id(dir)?, get_branch_commit_id(dir, "master")?);

    Ok(())
}

#[rstest]
fn checkout_clears_staged_files(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("draft.txt"), "draft".to_string()));
    gitlet_add(dir, "draft.txt").assert().success();

    run_gitlet_command(dir, &["checkout", "side"])
        .assert()
        .success();

    assert!(!dir.join("draft.txt").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}

#[rstest]
#[case::missing_branch("nowhere", "No such branch exists.\n")]
#[case::current_branch("master", "No need to checkout the current branch.\n")]
fn checkout_branch_rejections(
    diverged_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_gitlet_command(diverged_repository_dir.path(), &["checkout", branch])
        .assert()
        .failure()
        .stderr(predicate::str::diff(message.to_string()));
}

/// `shapes` tracks `dir/inner.txt` and a file named `notes`; master tracks
/// neither
#[fixture]
fn reshaped_repository_dir(committed_repository_dir: TempDir) -> TempDir {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["branch", "shapes"]).assert().success();
    run_gitlet_command(dir, &["checkout", "shapes"]).assert().success();

    write_file(FileSpec::new(dir.join("dir").join("inner.txt"), "inner".to_string()));
    write_file(FileSpec::new(dir.join("notes"), "tracked notes".to_string()));
    gitlet_add(dir, "dir/inner.txt").assert().success();
    gitlet_add(dir, "notes").assert().success();
    gitlet_commit(dir, "Shapes").assert().success();

    run_gitlet_command(dir, &["checkout", "master"]).assert().success();

    committed_repository_dir
}

#[rstest]
#[case::file_where_directory_goes("dir", "untracked")]
#[case::file_inside_replaced_directory("notes/precious.txt", "mine")]
fn blocking_file_aborts_checkout_untouched(
    reshaped_repository_dir: TempDir,
    #[case] blocker: &str,
    #[case] content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = reshaped_repository_dir.path();
    write_file(FileSpec::new(dir.join(blocker), content.to_string()));

    run_gitlet_command(dir, &["checkout", "shapes"])
        .assert()
        .failure()
        .stderr(predicate::str::diff(
            "There is an untracked file in the way; delete it or add it first.\n",
        ));

    assert_eq!(read_file(&dir.join(blocker)), content);
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two");
    assert_eq!(get_head_commit_id(dir)?, get_branch_commit_id(dir, "master")?);
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Branches ===\n*master\nshapes\n"));

    Ok(())
}
