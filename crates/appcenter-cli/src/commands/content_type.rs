//! Content-type command implementation

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct Classified<'a> {
    path: &'a str,
    content_type: &'static str,
}

/// Run the content-type command
pub fn run_content_type(paths: &[String], json: bool) -> Result<()> {
    print!("{}", render(paths, json)?);
    Ok(())
}

fn render(paths: &[String], json: bool) -> Result<String> {
    let classified: Vec<_> = paths
        .iter()
        .map(|path| Classified {
            path,
            content_type: appcenter_fs::content_type::for_path(path),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&classified)? + "\n");
    }

    let mut out = String::new();
    for entry in &classified {
        out.push_str(&format!("{}  {}\n", entry.path, entry.content_type.cyan()));
    }
    Ok(out)
}
