//! Data structures and algorithms
//!
//! - `branch`: Branch names
//! - `checkout`: Working-directory sync and the untracked-file guard
//! - `core`: Shared utilities (pager wrapper)
//! - `index`: Binary area files (staging, removal marks, commit log)
//! - `log`: Commit history traversal and commit log records
//! - `objects`: Object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
