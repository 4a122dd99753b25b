//! Persistent repository areas
//!
//! Each area owns one piece of the on-disk state under `.gitlet/`:
//!
//! - `database`: Object store for blobs and commits
//! - `index`: Staging area of pending adds
//! - `removals`: Paths marked for removal by `rm`
//! - `journal`: Log of every commit in creation order
//! - `refs`: Branch table and HEAD
//! - `repository`: Bundles the areas of one repository
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod journal;
pub mod refs;
pub mod removals;
pub mod repository;
pub mod workspace;
