//! Domain failures reported to the user
//!
//! Every failure a command can end with is a [`GitletError`] variant. Commands
//! raise them through `anyhow::bail!` so they travel alongside I/O errors, and
//! callers that care about the exact failure recover them with
//! `downcast_ref::<GitletError>()`.
//!
//! Validation always happens before any area is written, so returning one of
//! these errors never leaves the repository half-updated.

use thiserror::Error;

/// Broad classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed operand supplied by the user
    UserInput,
    /// The repository is not in a state that allows the command
    Precondition,
    /// A commit, file, branch or object could not be found
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileDoesNotExist,

    #[error("Please enter a commit message.")]
    MissingMessage,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("No changes added to the commit.")]
    NoChanges,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No commit with that id exists.")]
    UnknownCommit,

    #[error("Commit id prefix {0} is ambiguous.")]
    AmbiguousCommitId(String),

    #[error("File does not exist in that commit.")]
    FileNotFoundInCommit,

    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("Found no commit with that message.")]
    NoMatchingCommit,

    #[error("Object {0} not found.")]
    ObjectNotFound(String),
}

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::MissingMessage
            | GitletError::IncorrectOperands
            | GitletError::InvalidBranchName(_)
            | GitletError::AmbiguousCommitId(_) => ErrorKind::UserInput,
            GitletError::FileDoesNotExist
            | GitletError::BranchNotFound
            | GitletError::NoSuchBranch
            | GitletError::UnknownCommit
            | GitletError::FileNotFoundInCommit
            | GitletError::NoMatchingCommit
            | GitletError::ObjectNotFound(_) => ErrorKind::NotFound,
            GitletError::NotInitialized
            | GitletError::AlreadyInitialized
            | GitletError::NoChanges
            | GitletError::NoReasonToRemove
            | GitletError::BranchAlreadyExists
            | GitletError::AlreadyOnBranch
            | GitletError::RemoveCurrentBranch
            | GitletError::UntrackedFileInTheWay
            | GitletError::UncommittedChanges
            | GitletError::SelfMerge => ErrorKind::Precondition,
        }
    }
}

/// Recover the domain failure carried by an `anyhow` error, if any
pub fn as_gitlet_error(error: &anyhow::Error) -> Option<&GitletError> {
    error.downcast_ref::<GitletError>()
}
