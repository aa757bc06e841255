use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// One POM file to process: where it lives and, optionally, where the
/// mutated copy should be written instead of overwriting in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBackupInfo {
    pub source: Utf8PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Utf8PathBuf>,
}

impl FileBackupInfo {
    pub fn new(source: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: None,
        }
    }

    pub fn with_target(source: impl Into<Utf8PathBuf>, target: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: Some(target.into()),
        }
    }

    /// The path the mutated POM is written to.
    pub fn resolved_target(&self) -> &Utf8PathBuf {
        self.target.as_ref().unwrap_or(&self.source)
    }
}

/// Terminal state for one file. Skips never produce a write; a failed file
/// is left as the backup protects it (or untouched when no write happened).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IntegrationOutcome {
    Integrated,
    SkippedAlreadyPresent {
        /// Human-readable locator of the plugin that blocked integration.
        found_in: String,
    },
    SkippedInvalid {
        reason: String,
    },
    Failed {
        error: String,
    },
}

impl IntegrationOutcome {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            IntegrationOutcome::SkippedAlreadyPresent { .. }
                | IntegrationOutcome::SkippedInvalid { .. }
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, IntegrationOutcome::Failed { .. })
    }
}

/// Per-file result returned by the batch pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub source: Utf8PathBuf,
    pub target: Utf8PathBuf,
    pub outcome: IntegrationOutcome,

    /// Unified diff of the would-be change; only populated on dry runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}
