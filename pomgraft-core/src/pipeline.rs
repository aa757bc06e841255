//! The per-file integration state machine and the batch loop around it.
//!
//! Error containment follows the smallest-boundary rule: section errors are
//! swallowed inside `integrate_safe`, file errors become a `Failed` outcome,
//! and nothing aborts the batch.

use crate::ports::{BackupPort, WritePort};
use crate::settings::IntegrationSettings;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use diffy::PatchFormatter;
use fs_err as fs;
use pomgraft_integrate::{
    AgentPluginIntegrator, JmeterPluginIntegrator, SectionIntegrator,
    verify_surefire_arg_line_safe,
};
use pomgraft_types::{AgentConfig, FileBackupInfo, FileReport, IntegrationOutcome, plugins};
use tracing::{info, warn};

/// Process an ordered batch of POM files, strictly one at a time.
///
/// Every input produces exactly one report; a failure in one file is logged
/// and never propagated to its siblings.
pub fn integrate_files(
    config: &AgentConfig,
    settings: &IntegrationSettings,
    files: &[FileBackupInfo],
    backup: &dyn BackupPort,
    writer: &dyn WritePort,
) -> Vec<FileReport> {
    files
        .iter()
        .map(|file| {
            let report = integrate_file(config, settings, file, backup, writer);
            match &report.outcome {
                IntegrationOutcome::Integrated => info!("integrated {}", report.source),
                IntegrationOutcome::SkippedAlreadyPresent { found_in } => {
                    info!("skipping {}: already integrated ({found_in})", report.source);
                }
                IntegrationOutcome::SkippedInvalid { reason } => {
                    info!("skipping {}: {reason}", report.source);
                }
                IntegrationOutcome::Failed { error } => {
                    warn!("failed to integrate {}: {error}", report.source);
                }
            }
            report
        })
        .collect()
}

fn integrate_file(
    config: &AgentConfig,
    settings: &IntegrationSettings,
    file: &FileBackupInfo,
    backup: &dyn BackupPort,
    writer: &dyn WritePort,
) -> FileReport {
    let target = file.resolved_target().clone();
    match process(config, settings, file, backup, writer) {
        Ok((outcome, patch)) => FileReport {
            source: file.source.clone(),
            target,
            outcome,
            patch,
        },
        Err(err) => FileReport {
            source: file.source.clone(),
            target,
            outcome: IntegrationOutcome::Failed {
                error: format!("{err:#}"),
            },
            patch: None,
        },
    }
}

fn process(
    config: &AgentConfig,
    settings: &IntegrationSettings,
    file: &FileBackupInfo,
    backup: &dyn BackupPort,
    writer: &dyn WritePort,
) -> anyhow::Result<(IntegrationOutcome, Option<String>)> {
    let original =
        fs::read_to_string(&file.source).with_context(|| format!("read {}", file.source))?;

    let mut doc = match pomgraft_pom::PomDocument::parse(&original) {
        Ok(doc) => doc,
        Err(err) => {
            return Ok((
                IntegrationOutcome::SkippedInvalid {
                    reason: err.to_string(),
                },
                None,
            ));
        }
    };
    if !doc.is_valid() {
        return Ok((
            IntegrationOutcome::SkippedInvalid {
                reason: "root element is not <project>".to_string(),
            },
            None,
        ));
    }

    let agent = AgentPluginIntegrator::new(config, settings.version_override.as_deref());
    let jmeter = JmeterPluginIntegrator;

    // Whole-document eligibility: either plugin already integrated anywhere
    // blocks the file.
    if doc.plugin_exists_anywhere(plugins::AGENT_ARTIFACT_ID) {
        return Ok((
            IntegrationOutcome::SkippedAlreadyPresent {
                found_in: format!("{} declared in document", plugins::AGENT_ARTIFACT_ID),
            },
            None,
        ));
    }
    if let Some(found_in) = jmeter.integrated_anywhere(&doc)? {
        return Ok((IntegrationOutcome::SkippedAlreadyPresent { found_in }, None));
    }

    if settings.backup && !settings.dry_run {
        let backup_path = Utf8PathBuf::from(format!("{}{}", file.source, settings.backup_suffix));
        if let Err(err) = backup.backup(&file.source, &backup_path) {
            warn!("backup of {} failed, continuing: {err:#}", file.source);
        }
    }

    // Root first, then profiles in declaration order.
    for section in doc.sections()? {
        agent.integrate_safe(&mut doc, &section);
        jmeter.integrate_safe(&mut doc, &section);
    }
    verify_surefire_arg_line_safe(&mut doc);

    if settings.dry_run {
        let patch = render_patch(&file.source, &original, doc.as_str());
        return Ok((IntegrationOutcome::Integrated, Some(patch)));
    }

    let target = file.resolved_target();
    writer
        .write_file(target, doc.as_str().as_bytes())
        .with_context(|| format!("write {target}"))?;
    Ok((IntegrationOutcome::Integrated, None))
}

fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }
    let mut out = String::new();
    out.push_str(&format!("--- a/{path}\n+++ b/{path}\n"));
    let patch = diffy::create_patch(before, after);
    out.push_str(&PatchFormatter::new().fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
