//! Resolution of artifact paths staged on a build agent

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::remote::{RemoteDir, RemoteFile};
use crate::{Result, content_type};

/// Everything the upload step needs to know about one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    pub content_type: &'static str,
}

/// Resolves artifact paths against an agent directory.
///
/// Holds no per-call state: every lookup goes back to the directory handle,
/// so results for one path never depend on earlier lookups of another.
/// Errors from the handle are returned as-is.
#[derive(Debug, Clone)]
pub struct RemoteFileUtils<D> {
    root: D,
}

impl<D: RemoteDir> RemoteFileUtils<D> {
    pub fn new(root: D) -> Self {
        Self { root }
    }

    /// The directory handle paths are resolved against.
    pub fn root(&self) -> &D {
        &self.root
    }

    /// Resolve `path` to a local handle on the agent's absolute path.
    pub fn remote_file(&self, path: &str) -> Result<PathBuf> {
        let child = self.root.child(path)?;
        let remote = child.remote();
        tracing::debug!(path, remote = %remote, "Resolved remote file");
        Ok(PathBuf::from(remote))
    }

    /// Last segment of the resolved path, per the host path grammar.
    ///
    /// Empty when the path has no final segment, e.g. `/`.
    pub fn file_name(&self, path: &str) -> Result<String> {
        let file = self.remote_file(path)?;
        Ok(file_name_of(&file))
    }

    /// Size in bytes reported by the agent.
    pub fn file_size(&self, path: &str) -> Result<u64> {
        self.root.child(path)?.length()
    }

    /// Content type for `path`, chosen by extension.
    ///
    /// See [`content_type::for_path`].
    pub fn content_type(&self, path: &str) -> &'static str {
        content_type::for_path(path)
    }

    /// Resolve name, size and content type in one pass.
    pub fn describe(&self, path: &str) -> Result<ArtifactInfo> {
        let child = self.root.child(path)?;
        let resolved = PathBuf::from(child.remote());
        let size = child.length()?;
        let info = ArtifactInfo {
            file_name: file_name_of(&resolved),
            path: resolved,
            size,
            content_type: content_type::for_path(path),
        };
        tracing::debug!(
            path,
            file_name = %info.file_name,
            size = info.size,
            content_type = info.content_type,
            "Described artifact"
        );
        Ok(info)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalDir;
    use tempfile::tempdir;

    #[test]
    fn describe_matches_individual_lookups() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("out")).unwrap();
        std::fs::write(dir.path().join("out/App.MSIX"), b"abc").unwrap();
        let utils = RemoteFileUtils::new(LocalDir::open(dir.path()).unwrap());

        let info = utils.describe("out/App.MSIX").unwrap();

        assert_eq!(info.path, utils.remote_file("out/App.MSIX").unwrap());
        assert_eq!(info.file_name, utils.file_name("out/App.MSIX").unwrap());
        assert_eq!(info.size, utils.file_size("out/App.MSIX").unwrap());
        assert_eq!(info.content_type, "application/x-msix");
    }

    #[test]
    fn borrowed_root_is_accepted() {
        let dir = tempdir().unwrap();
        let local = LocalDir::open(dir.path()).unwrap();
        let utils = RemoteFileUtils::new(&local);

        assert_eq!(utils.file_name("a/b/c.aab").unwrap(), "c.aab");
    }

    #[test]
    fn file_name_of_root_is_empty() {
        assert_eq!(file_name_of(Path::new("/")), "");
    }
}
