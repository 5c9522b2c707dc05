//! [`FakeRemoteDir`]: a deterministic in-memory agent directory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::sync::Mutex;

use appcenter_fs::{Error, NormalizedPath, RemoteDir, RemoteFile, Result};

/// An agent directory whose files exist only in memory.
///
/// Children resolve by joining onto the root with forward slashes, the way a
/// Unix agent would report them. Every `child` request is recorded.
///
/// # Example
///
/// ```rust
/// use appcenter_fs::RemoteFileUtils;
/// use appcenter_test_utils::FakeRemoteDir;
///
/// let dir = FakeRemoteDir::new("/agent/workspace").with_file("app.apk", 12);
/// let utils = RemoteFileUtils::new(dir);
/// assert_eq!(utils.file_size("app.apk").unwrap(), 12);
/// ```
#[derive(Debug)]
pub struct FakeRemoteDir {
    root: NormalizedPath,
    sizes: HashMap<String, u64>,
    failures: HashMap<String, ErrorKind>,
    requests: Mutex<Vec<String>>,
}

impl FakeRemoteDir {
    pub fn new(root: &str) -> Self {
        Self {
            root: NormalizedPath::new(root),
            sizes: HashMap::new(),
            failures: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Register a file of `size` bytes at `path` (relative to the root or absolute).
    pub fn with_file(mut self, path: &str, size: u64) -> Self {
        let resolved = self.root.join(path).as_str().to_string();
        self.sizes.insert(resolved, size);
        self
    }

    /// Make resolving `name` fail with `kind`.
    pub fn with_failure(mut self, name: &str, kind: ErrorKind) -> Self {
        self.failures.insert(name.to_string(), kind);
        self
    }

    /// Names passed to `child`, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RemoteDir for FakeRemoteDir {
    type Child = FakeRemoteFile;

    fn child(&self, name: &str) -> Result<FakeRemoteFile> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(name.to_string());

        if let Some(kind) = self.failures.get(name) {
            return Err(Error::io(name, std::io::Error::from(*kind)));
        }

        let remote = self.root.join(name).as_str().to_string();
        let size = self.sizes.get(&remote).copied();
        Ok(FakeRemoteFile { remote, size })
    }
}

/// A child of [`FakeRemoteDir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRemoteFile {
    remote: String,
    size: Option<u64>,
}

impl RemoteFile for FakeRemoteFile {
    fn remote(&self) -> String {
        self.remote.clone()
    }

    fn length(&self) -> Result<u64> {
        self.size
            .ok_or_else(|| Error::io(&self.remote, std::io::Error::from(ErrorKind::NotFound)))
    }
}
