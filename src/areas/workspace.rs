use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Entries never treated as working files
const IGNORED_PATHS: [&str; 1] = [".gitlet"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a path typed by the user into one relative to the root
    ///
    /// Relative paths are taken from the root; absolute ones must live under
    /// it. `.` components are dropped and `..` is resolved lexically.
    pub fn normalize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let relative = if path.is_absolute() {
            path.strip_prefix(self.path.as_ref())
                .with_context(|| format!("{} is outside the repository", path.display()))?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                Component::ParentDir if normalized.pop() => {}
                _ => anyhow::bail!("{} is outside the repository", path.display()),
            }
        }

        if normalized.as_os_str().is_empty() || Self::is_ignored(&normalized) {
            anyhow::bail!("{} is not a working file", path.display());
        }
        if !Self::is_trackable(&normalized) {
            anyhow::bail!(
                "{:?} cannot be tracked: names must be UTF-8 without line breaks",
                path
            );
        }

        Ok(normalized)
    }

    /// Every working file, relative to the root, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| {
                !IGNORED_PATHS.contains(&entry.file_name().to_string_lossy().as_ref())
            });

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to list working files in {}", self.path.display())
            })?;

            if entry.file_type().is_file()
                && let Ok(relative_path) = entry.path().strip_prefix(self.path.as_ref())
            {
                files.push(relative_path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Commits store one path per line
    fn is_trackable(path: &Path) -> bool {
        path.to_str()
            .is_some_and(|path| !path.contains(['\n', '\r']))
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            } else {
                false
            }
        })
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Write a file, creating its missing parent directories
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        if full_path.is_dir() {
            self.remove_empty_dirs(&full_path)?;
        }

        std::fs::write(&full_path, data)
            .with_context(|| format!("Failed to write to file {}", full_path.display()))?;

        tracing::trace!(path = %file_path.display(), bytes = data.len(), "wrote working file");
        Ok(())
    }

    /// Delete a file if present, pruning the directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Ok(());
        }

        std::fs::remove_file(&full_path)
            .with_context(|| format!("Failed to remove file {}", full_path.display()))?;
        self.prune_empty_parent_dirs(&full_path)?;

        tracing::trace!(path = %file_path.display(), "removed working file");
        Ok(())
    }

    /// Remove a directory holding nothing but empty directories
    ///
    /// `remove_dir` refuses non-empty directories, so a file left inside
    /// aborts the write instead of being lost.
    fn remove_empty_dirs(&self, path: &Path) -> anyhow::Result<()> {
        for entry in WalkDir::new(path).contents_first(true) {
            let entry = entry
                .with_context(|| format!("Unable to list directory {}", path.display()))?;

            std::fs::remove_dir(entry.path()).with_context(|| {
                format!("Failed to remove directory {}", entry.path().display())
            })?;
        }

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("Failed to remove empty directory {}", parent.display())
            })?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
