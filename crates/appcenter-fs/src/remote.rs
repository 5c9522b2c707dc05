//! Directory handles for files staged on a build agent
//!
//! The agent may be the local machine or a remote node reached through some
//! bridge. Callers only see [`RemoteDir`] and [`RemoteFile`]; [`LocalDir`]
//! is the adapter for agents that share the host file system.

use std::path::{Path, PathBuf};

use crate::{Error, Result, io};

/// A directory on a possibly-remote file system.
pub trait RemoteDir {
    /// Handle type for resolved children.
    type Child: RemoteFile;

    /// Resolve `name` relative to this directory.
    ///
    /// The child is not required to exist.
    fn child(&self, name: &str) -> Result<Self::Child>;
}

/// A resolved path on a possibly-remote file system.
pub trait RemoteFile {
    /// Absolute path string as seen by the agent.
    fn remote(&self) -> String;

    /// Size in bytes as reported by the agent's file system.
    fn length(&self) -> Result<u64>;
}

impl<D: RemoteDir + ?Sized> RemoteDir for &D {
    type Child = D::Child;

    fn child(&self, name: &str) -> Result<Self::Child> {
        (**self).child(name)
    }
}

/// A directory on the host file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDir {
    root: PathBuf,
}

impl LocalDir {
    /// Open `root`, resolving it to an absolute path.
    ///
    /// Fails if the directory does not exist.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = dunce::canonicalize(root).map_err(|e| Error::io(root, e))?;
        tracing::debug!(root = %canonical.display(), "Opened local agent directory");
        Ok(Self { root: canonical })
    }

    /// The absolute root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RemoteDir for LocalDir {
    type Child = LocalFile;

    fn child(&self, name: &str) -> Result<LocalFile> {
        Ok(LocalFile {
            path: self.root.join(name),
        })
    }
}

/// A path resolved against a [`LocalDir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl RemoteFile for LocalFile {
    fn remote(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn length(&self) -> Result<u64> {
        io::file_length(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_missing_root_fails_with_io() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("not-here");

        let err = LocalDir::open(&missing).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn child_of_absolute_name_replaces_root() {
        let dir = tempdir().unwrap();
        let local = LocalDir::open(dir.path()).unwrap();
        let other = dir.path().join("elsewhere.apk");

        let child = local.child(&other.to_string_lossy()).unwrap();
        assert_eq!(PathBuf::from(child.remote()), other);
    }

    #[test]
    fn length_reads_metadata() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.bin"), [0u8; 7]).unwrap();
        let local = LocalDir::open(dir.path()).unwrap();

        assert_eq!(local.child("a.bin").unwrap().length().unwrap(), 7);
    }
}
