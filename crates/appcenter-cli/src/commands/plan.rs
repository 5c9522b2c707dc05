//! Plan command implementation

use std::path::{Path, PathBuf};

use appcenter_fs::{
    ArtifactInfo, ConfigStore, LocalDir, NormalizedPath, RemoteDir, RemoteFileUtils, UploadConfig,
};
use colored::Colorize;
use serde::Serialize;

use super::inspect::render_artifacts;
use crate::error::Result;

/// What an upload described by a config would send.
#[derive(Debug, Serialize)]
struct UploadPlan {
    owner_name: String,
    app_name: String,
    root: PathBuf,
    artifacts: Vec<ArtifactInfo>,
    release_notes: Option<PathBuf>,
    distribution_groups: Vec<String>,
    notify_testers: bool,
}

/// Run the plan command
pub fn run_plan(config_path: &Path, json: bool) -> Result<()> {
    let config = ConfigStore::new().load_upload(&NormalizedPath::new(config_path))?;
    let plan = build_plan(config_path, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} {}/{}",
        "Upload plan for".bold(),
        plan.owner_name.cyan(),
        plan.app_name.cyan()
    );
    println!("{}:   {}", "Root".dimmed(), plan.root.display());
    println!();
    print!("{}", render_artifacts(&plan.artifacts));
    println!();
    if let Some(notes) = &plan.release_notes {
        println!("{}:   {}", "Release notes".dimmed(), notes.display());
    }
    if plan.distribution_groups.is_empty() {
        println!("{}:   {}", "Groups".dimmed(), "None".dimmed());
    } else {
        println!("{}:   {}", "Groups".dimmed(), plan.distribution_groups.join(", "));
    }
    println!("{}:   {}", "Notify testers".dimmed(), plan.notify_testers);
    Ok(())
}

fn build_plan(config_path: &Path, config: UploadConfig) -> Result<UploadPlan> {
    let config_dir = config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let root = match &config.root {
        Some(root) => config_dir.join(root),
        None => config_dir.to_path_buf(),
    };

    let dir = LocalDir::open(&root)?;
    let utils = RemoteFileUtils::new(&dir);
    let artifacts = config
        .artifact_paths()
        .map(|path| utils.describe(path))
        .collect::<appcenter_fs::Result<Vec<_>>>()?;
    let release_notes = config
        .path_to_release_notes
        .as_deref()
        .map(|notes| resolve_existing(&utils, notes))
        .transpose()?;

    Ok(UploadPlan {
        owner_name: config.owner_name,
        app_name: config.app_name,
        root: dir.root().to_path_buf(),
        artifacts,
        release_notes,
        distribution_groups: config.distribution_groups,
        notify_testers: config.notify_testers,
    })
}

/// Resolve `path` and fail the same way a missing artifact does.
fn resolve_existing<D: RemoteDir>(utils: &RemoteFileUtils<D>, path: &str) -> Result<PathBuf> {
    utils.file_size(path)?;
    Ok(utils.remote_file(path)?)
}
