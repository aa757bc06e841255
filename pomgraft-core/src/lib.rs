//! Embeddable core library for pomgraft.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into a build-server plugin or other host process.
//!
//! # Port traits
//!
//! Side effects are abstracted behind port traits in [`ports`]:
//! - [`BackupPort`](ports::BackupPort) — copy a POM aside before mutation
//! - [`WritePort`](ports::WritePort) — persist the mutated POM
//!
//! The [`adapters`] module provides default filesystem-backed
//! implementations.
//!
//! # Entry point
//!
//! [`integrate_files`](pipeline::integrate_files) processes an ordered batch
//! of POM files, one outcome per file, never aborting the batch.

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use pipeline::integrate_files;
pub use settings::IntegrationSettings;

// Re-export the outcome types so embedders don't need pomgraft-types directly.
pub use pomgraft_types::{AgentConfig, FileBackupInfo, FileReport, IntegrationOutcome};
