//! A small local version-control system
//!
//! Content-addressed blobs and commits, a staging area, removal marks,
//! branches and a working-directory sync that refuses to clobber untracked
//! files. Commands are methods on [`areas::repository::Repository`].

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
