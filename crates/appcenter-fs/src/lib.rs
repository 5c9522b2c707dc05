//! Artifact resolution for App Center uploads
//!
//! Resolves build artifacts staged on an agent to their absolute path, file
//! name, size and upload content type.

pub mod config;
pub mod content_type;
pub mod error;
pub mod io;
pub mod logging;
pub mod path;
pub mod remote;
pub mod resolver;

pub use config::{ConfigStore, DEFAULT_CONFIG_FILE, UploadConfig};
pub use content_type::DEFAULT_CONTENT_TYPE;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use remote::{LocalDir, LocalFile, RemoteDir, RemoteFile};
pub use resolver::{ArtifactInfo, RemoteFileUtils};
