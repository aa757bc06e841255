//! Configuration file loading for pomgraft.
//!
//! Discovers and loads `pomgraft.toml` from the search folder. CLI flags
//! take precedence over file values.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use pomgraft_types::{AgentConfig, BACKUP_SUFFIX};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "pomgraft.toml";

/// Top-level configuration from pomgraft.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// The instrumentation payload written into generated plugin blocks.
    pub agent: AgentConfig,

    /// Backup settings.
    pub backups: BackupsConfig,
}

/// Backups section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupsConfig {
    /// Whether to copy each POM aside before mutating it.
    pub enabled: bool,

    /// Suffix for backup files.
    pub suffix: String,
}

impl Default for BackupsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffix: BACKUP_SUFFIX.to_string(),
        }
    }
}

/// Discover the pomgraft.toml config file in `folder`.
pub fn discover_config(folder: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = folder.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a pomgraft.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<CliConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    toml::from_str(&contents).with_context(|| format!("parse config file {}", path))
}

/// Load the config from an explicit path, from discovery, or fall back to
/// defaults when no file exists.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    folder: &Utf8Path,
) -> anyhow::Result<CliConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match discover_config(folder) {
            Some(path) => load_config(&path),
            None => Ok(CliConfig::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_agent_and_backup_sections() {
        let cfg: CliConfig = toml::from_str(
            r#"
[agent]
server_url = "https://collector.example.com"
customer_id = "acme"
app_name = "shop"
recursive = true

[backups]
enabled = false
suffix = ".keep"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.agent.server_url.as_deref(), Some("https://collector.example.com"));
        assert!(cfg.agent.recursive);
        assert!(!cfg.backups.enabled);
        assert_eq!(cfg.backups.suffix, ".keep");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: CliConfig = toml::from_str("").expect("parse");
        assert!(cfg.backups.enabled);
        assert_eq!(cfg.backups.suffix, BACKUP_SUFFIX);
        assert_eq!(cfg.agent.app_name, None);
    }
}
