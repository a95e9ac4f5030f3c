//! Configuration loading for interview reports

mod schema;

pub use schema::{Config, OutputFormat};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".interviewrc.json";

/// Find and load the config file. Searches `work_dir` then its parents.
///
/// Returns the config together with the path it was loaded from (None when
/// no config file exists and defaults are used).
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => Ok((read_config(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))
}

/// Search for .interviewrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Default config file contents written by `init`
pub fn default_config_json(threshold: f64) -> String {
    format!(
        r#"{{
  "threshold": {},
  "title": "Interview Results",
  "format": "console",
  "expandQuestions": false,
  "prettyJson": true
}}
"#,
        threshold
    )
}
