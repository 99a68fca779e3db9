//! Output tree ownership
//!
//! Regeneration is destructive: [`OutputRoot::reset`] removes the whole
//! output tree and recreates it empty, and every file of the run is then
//! written through the returned handle. Nothing from an earlier run survives,
//! so stale components disappear as soon as their icon does.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{GenerateError, Result};

/// Exclusive handle on a freshly emptied output directory
#[derive(Debug)]
pub struct OutputRoot {
    root: PathBuf,
}

impl OutputRoot {
    /// Remove `root` and everything under it, then recreate it empty
    ///
    /// `containers` are directories the output may live in but must never
    /// replace, such as the project root. `inputs` are files and directories
    /// the run still reads, such as the icon source directory; the output may
    /// neither contain them nor live inside them. All paths are compared in
    /// canonical form, so `..` segments, symlinks and absolute spellings of
    /// the same location are caught. A missing `root` is not an error.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::UnsafeOutputDir`] if `root` overlaps a protected
    ///   path
    /// - [`GenerateError::ResolvePath`] if a path cannot be resolved
    /// - [`GenerateError::RemoveOutput`] / [`GenerateError::CreateDir`] on
    ///   filesystem failures
    pub fn reset(root: &Path, containers: &[&Path], inputs: &[&Path]) -> Result<Self> {
        let target = check_target(root, containers, inputs)?;
        tracing::info!(path = %target.display(), "resetting output directory");

        match fs::remove_dir_all(root) {
            Ok(()) => tracing::debug!(path = %root.display(), "removed previous output"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(GenerateError::RemoveOutput {
                    path: root.to_path_buf(),
                    source,
                })
            }
        }

        create_dir(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Output root directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `contents` to `relative`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CreateDir`] or [`GenerateError::Write`].
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }

        fs::write(&path, contents).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Copy the file at `from` to `relative`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CreateDir`] or [`GenerateError::CopyReadme`].
    pub fn copy(&self, from: &Path, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let to = self.root.join(relative);
        if let Some(parent) = to.parent() {
            create_dir(parent)?;
        }

        fs::copy(from, &to).map_err(|source| GenerateError::CopyReadme {
            from: from.to_path_buf(),
            to: to.clone(),
            source,
        })?;
        Ok(to)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Canonical form of `root` once it is known not to overlap a protected path
fn check_target(root: &Path, containers: &[&Path], inputs: &[&Path]) -> Result<PathBuf> {
    let target = resolve(root)?;
    let refuse = |protected: &Path| GenerateError::UnsafeOutputDir {
        path: root.to_path_buf(),
        protected: protected.to_path_buf(),
    };

    for &container in containers {
        if resolve(container)?.starts_with(&target) {
            return Err(refuse(container));
        }
    }
    for &input in inputs {
        let resolved = resolve(input)?;
        if resolved.starts_with(&target) || target.starts_with(&resolved) {
            return Err(refuse(input));
        }
    }

    Ok(target)
}

/// Absolute, symlink-free form of `path`, which need not exist yet
///
/// The nearest existing ancestor is canonicalized and the missing tail is
/// appended to it.
fn resolve(path: &Path) -> Result<PathBuf> {
    let resolve_error = |source| GenerateError::ResolvePath {
        path: path.to_path_buf(),
        source,
    };
    let absolute = std::path::absolute(path).map_err(resolve_error)?;

    for existing in absolute.ancestors() {
        match fs::canonicalize(existing) {
            Ok(canonical) => {
                let missing = absolute.strip_prefix(existing).unwrap_or(Path::new(""));
                return Ok(normalize(&canonical.join(missing)));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(resolve_error(source)),
        }
    }

    Ok(normalize(&absolute))
}

/// Resolve `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // ".." at the filesystem root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
