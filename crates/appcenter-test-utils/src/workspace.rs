//! [`TestWorkspace`]: a temporary agent workspace on disk.

use std::fs;
use std::path::{Path, PathBuf};

use appcenter_fs::LocalDir;
use tempfile::TempDir;

/// A temporary directory standing in for an agent workspace.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the workspace.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Open the workspace as a [`LocalDir`].
    pub fn local_dir(&self) -> LocalDir {
        LocalDir::open(self.root()).expect("TestWorkspace::local_dir: failed to open root")
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Copy the byte-exact `xiola.apk` fixture to `relative`.
    pub fn stage_fixture_apk(&self, relative: &str) -> PathBuf {
        self.write_file(relative, XIOLA_APK)
    }
}

/// Contents of the `xiola.apk` fixture: 41 bytes, no line endings.
pub const XIOLA_APK: &[u8] = b"PK\x03\x04xiola-test-artifact-for-upload-checks";
