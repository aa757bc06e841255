//! Shared DTOs for the pomgraft workspace.
//!
//! # Design constraints
//! - `AgentConfig` is deserialized from user-supplied TOML; be tolerant.
//! - Prefer adding optional fields over changing semantics.

pub mod config;
pub mod outcome;

pub use config::{AgentConfig, BuildStrategy, LogDestination, LogLevel, LogSettings};
pub use outcome::{FileBackupInfo, FileReport, IntegrationOutcome};

/// Fixed identifiers for the plugins pomgraft knows about.
pub mod plugins {
    /// The instrumentation plugin injected into every build section.
    pub const AGENT_GROUP_ID: &str = "io.pomgraft";
    pub const AGENT_ARTIFACT_ID: &str = "pomgraft-maven-plugin";
    pub const AGENT_DEFAULT_VERSION: &str = "1.0.0";

    /// The third-party load-testing plugin pomgraft coexists with.
    pub const JMETER_GROUP_ID: &str = "com.lazerycode.jmeter";
    pub const JMETER_ARTIFACT_ID: &str = "jmeter-maven-plugin";

    /// The test-execution plugin whose argLine must keep referencing the agent.
    pub const SUREFIRE_ARTIFACT_ID: &str = "maven-surefire-plugin";

    /// Maven property the agent plugin populates with its `-javaagent` flags.
    pub const ARG_LINE_PLACEHOLDER: &str = "${pomgraft.argLine}";
}

/// Suffix appended to a POM path when a pre-mutation backup is taken.
pub const BACKUP_SUFFIX: &str = ".slbak";
