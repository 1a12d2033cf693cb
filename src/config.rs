//! Configuration file support
//!
//! Config files are loaded in order (later overrides earlier):
//! 1. `~/.config/retest/config.toml` (user defaults)
//! 2. `.retest.toml` in the analyzed project directory (project overrides)
//!
//! CLI flags override all config file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Options loadable from config files.
///
/// # Example
///
/// ```toml
/// # ~/.config/retest/config.toml or <project>/.retest.toml
/// graph_file = "callgraph.json"   # analysis dump inside the project dir
/// output_dir = "build/rts"        # where selection artifacts land
/// quiet = false
/// verbose = false
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis dump file name, relative to the project directory
    pub graph_file: Option<String>,
    /// Directory the default selection artifacts are written to
    pub output_dir: Option<PathBuf>,
    /// Suppress the human summary by default
    pub quiet: Option<bool>,
    /// Print per-stage detail by default
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from user and project config files.
    pub fn load(project_dir: &Path) -> Self {
        let user_config = dirs::config_dir()
            .map(|d| d.join("retest/config.toml"))
            .and_then(|p| Self::load_file(&p))
            .unwrap_or_default();

        let project_config =
            Self::load_file(&project_dir.join(".retest.toml")).unwrap_or_default();

        // Project overrides user
        let merged = user_config.override_with(project_config);
        tracing::debug!(
            graph_file = ?merged.graph_file,
            output_dir = ?merged.output_dir,
            quiet = ?merged.quiet,
            verbose = ?merged.verbose,
            "Effective config after merge"
        );
        merged
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file is normal; an unreadable or unparseable one is
    /// reported and skipped rather than failing the run.
    fn load_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge, with `other`'s set fields taking precedence.
    fn override_with(self, other: Self) -> Self {
        Self {
            graph_file: other.graph_file.or(self.graph_file),
            output_dir: other.output_dir.or(self.output_dir),
            quiet: other.quiet.or(self.quiet),
            verbose: other.verbose.or(self.verbose),
        }
    }
}
