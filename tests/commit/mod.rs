mod commit_changes;
mod commit_failures;
