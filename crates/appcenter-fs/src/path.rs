//! Normalized path handling for agent-side paths
//!
//! Paths handed to the uploader may come from a Windows agent or a Unix
//! agent regardless of the host running the check, so segment and
//! extension extraction work on a separator-agnostic form.

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Converts to platform-native format only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/x`, `//server/share` or `C:/x`).
    pub fn is_absolute(&self) -> bool {
        if self.inner.starts_with('/') {
            return true;
        }
        let bytes = self.inner.as_bytes();
        bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
    }

    /// Join this path with a segment.
    ///
    /// An absolute segment replaces the base, mirroring [`Path::join`].
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment);
        if segment.is_absolute() || self.inner.is_empty() {
            return segment;
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment.inner)
        } else {
            format!("{}/{}", self.inner, segment.inner)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the text after the last `.` of the file name, if it has one.
    ///
    /// A leading dot counts, so `.apk` has the extension `apk`.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        let idx = name.rfind('.')?;
        Some(&name[idx + 1..])
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
