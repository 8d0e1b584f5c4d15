//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::student::DEFAULT_COURSE_SEPARATOR;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Separator placed between course names in student listings.
    #[serde(default = "default_course_separator")]
    pub course_separator: String,
    /// Course whose cross-student and cross-lecturer averages are reported.
    #[serde(default = "default_report_course")]
    pub report_course: String,
}

fn default_course_separator() -> String {
    DEFAULT_COURSE_SEPARATOR.to_string()
}

fn default_report_course() -> String {
    "Python".to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            course_separator: default_course_separator(),
            report_course: default_report_course(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable override: `GRADEBOOK_COURSE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(course) = std::env::var("GRADEBOOK_COURSE") {
        if !course.trim().is_empty() {
            config.report_course = course;
        }
    }

    Ok(config)
}

/// Parse a config from TOML text.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str::<GradebookConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
