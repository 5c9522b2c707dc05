//! Inspect command implementation

use std::path::Path;

use appcenter_fs::{ArtifactInfo, LocalDir, RemoteFileUtils};
use colored::Colorize;

use crate::error::Result;

/// Run the inspect command
pub fn run_inspect(root: &Path, paths: &[String], json: bool) -> Result<()> {
    let utils = RemoteFileUtils::new(LocalDir::open(root)?);
    let artifacts = paths
        .iter()
        .map(|path| utils.describe(path))
        .collect::<appcenter_fs::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        print!("{}", render_artifacts(&artifacts));
    }
    Ok(())
}

/// Human-readable artifact listing, shared with the plan command.
pub(crate) fn render_artifacts(artifacts: &[ArtifactInfo]) -> String {
    let mut out = String::new();
    for artifact in artifacts {
        out.push_str(&format!(
            "{}  {} bytes  {}\n",
            artifact.file_name.bold(),
            artifact.size,
            artifact.content_type.cyan()
        ));
        out.push_str(&format!("  {}\n", artifact.path.display().to_string().dimmed()));
    }
    out
}
