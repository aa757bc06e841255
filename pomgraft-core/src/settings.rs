//! Clap-free settings for the integration pipeline.

use pomgraft_types::BACKUP_SUFFIX;

/// Knobs for one batch run. The instrumentation payload itself lives in
/// [`AgentConfig`](pomgraft_types::AgentConfig) and is passed separately.
#[derive(Debug, Clone)]
pub struct IntegrationSettings {
    /// Copy each POM to `<source><backup_suffix>` before mutating it.
    pub backup: bool,
    pub backup_suffix: String,

    /// Compute patches but write nothing, not even backups.
    pub dry_run: bool,

    /// Overrides the pinned agent plugin version.
    pub version_override: Option<String>,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            backup: true,
            backup_suffix: BACKUP_SUFFIX.to_string(),
            dry_run: false,
            version_override: None,
        }
    }
}
