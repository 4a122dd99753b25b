//! Commit history
//!
//! - `rev_list`: lazy walk from a commit back to the root along parent links
//! - `journal_entry`: records of the append-ordered commit log used by
//!   `global-log` and `find`

pub mod journal_entry;
pub mod rev_list;
