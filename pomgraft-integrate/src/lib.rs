//! Section integrators: the logic that knows what to inject into one build
//! section and how to detect that it already happened.
//!
//! Two implementations share the [`SectionIntegrator`] contract: the agent
//! plugin integrator (injects our own plugin) and the jmeter coexistence
//! integrator (wires the agent into an already-declared third-party
//! load-testing plugin). The surefire argument-line verifier lives here too;
//! it is a whole-document pass rather than a per-section integrator.

mod agent;
mod jmeter;
mod surefire;
mod xml;

pub use agent::AgentPluginIntegrator;
pub use jmeter::JmeterPluginIntegrator;
pub use surefire::verify_surefire_arg_line_safe;

use pomgraft_pom::{PomDocument, PomResult, SectionId};
use tracing::warn;

/// One plugin's integration rules for a single build section.
///
/// Implementations must be idempotent: integrating a section that is already
/// integrated is a no-op, never a duplicate.
pub trait SectionIntegrator {
    fn artifact_id(&self) -> &str;

    /// Human-readable locator used in log lines and skip reasons.
    fn plugin_descriptor(&self, section: &SectionId) -> String {
        format!("{} in {}", self.artifact_id(), section)
    }

    fn is_already_integrated(&self, doc: &PomDocument, section: &SectionId) -> bool;

    /// First section where integration is already detected, as a descriptor
    /// string. Used for the whole-document eligibility check.
    fn integrated_anywhere(&self, doc: &PomDocument) -> PomResult<Option<String>> {
        for section in doc.sections()? {
            if self.is_already_integrated(doc, &section) {
                return Ok(Some(self.plugin_descriptor(&section)));
            }
        }
        Ok(None)
    }

    fn integrate(&self, doc: &mut PomDocument, section: &SectionId) -> anyhow::Result<()>;

    /// Non-throwing variant: a failure in one section is logged and must not
    /// prevent integration into the remaining sections.
    fn integrate_safe(&self, doc: &mut PomDocument, section: &SectionId) {
        if let Err(err) = self.integrate(doc, section) {
            warn!(
                "failed to integrate {}: {:#}",
                self.plugin_descriptor(section),
                err
            );
        }
    }
}
