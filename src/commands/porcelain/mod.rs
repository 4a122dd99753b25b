//! User-facing commands
//!
//! - `init`: Create a repository with its root commit
//! - `add`: Stage a file for commit
//! - `commit`: Record the staged snapshot
//! - `rm`: Unstage a file or mark it for removal
//! - `log`: Show the history of the current branch
//! - `global_log`: Show every commit ever made
//! - `find`: Print the ids of commits with a given message
//! - `status`: Show branches, staged, removed, modified and untracked files
//! - `checkout`: Restore a file or switch branches
//! - `branch`: Create a branch
//! - `rm_branch`: Delete a branch pointer
//! - `reset`: Move the current branch to a commit and sync to it
//! - `merge`: Check whether a branch can be merged
//!
//! Mutating commands validate everything before touching any area and
//! persist the areas once, at the end.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod rm_branch;
pub mod status;
