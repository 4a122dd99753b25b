//! Working-directory sync
//!
//! Switching the working directory to another snapshot happens in two
//! phases. Planning runs the untracked-file guard and loads every blob the
//! target needs; only then are files deleted and written. A failed plan
//! leaves the working directory untouched.

pub mod conflict;
pub mod migration;
