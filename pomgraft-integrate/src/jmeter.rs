use crate::SectionIntegrator;
use pomgraft_pom::{PomDocument, SectionId};
use pomgraft_types::plugins;
use tracing::debug;

/// JVM settings path inside the jmeter plugin's configuration.
const JVM_ARGS_PATH: &[&str] = &["configuration", "jMeterProcessJVMSettings", "arguments"];

/// Coexistence integrator for the lazerycode jmeter plugin.
///
/// Never introduces the plugin: when it is absent there is nothing to
/// coexist with. When present, the agent placeholder is appended as its own
/// `<argument>` entry, so user-specified JVM arguments survive untouched and
/// no string-concatenation delimiter question arises.
pub struct JmeterPluginIntegrator;

impl JmeterPluginIntegrator {
    fn has_agent_argument(&self, doc: &PomDocument, section: &SectionId) -> bool {
        doc.plugin_texts(
            section,
            plugins::JMETER_ARTIFACT_ID,
            JVM_ARGS_PATH,
            "argument",
        )
        .iter()
        .any(|arg| arg.contains(plugins::ARG_LINE_PLACEHOLDER))
    }
}

impl SectionIntegrator for JmeterPluginIntegrator {
    fn artifact_id(&self) -> &str {
        plugins::JMETER_ARTIFACT_ID
    }

    fn is_already_integrated(&self, doc: &PomDocument, section: &SectionId) -> bool {
        doc.section_declares_plugin(section, plugins::JMETER_ARTIFACT_ID)
            && self.has_agent_argument(doc, section)
    }

    fn integrate(&self, doc: &mut PomDocument, section: &SectionId) -> anyhow::Result<()> {
        if !doc.section_declares_plugin(section, plugins::JMETER_ARTIFACT_ID) {
            return Ok(());
        }
        if self.has_agent_argument(doc, section) {
            debug!(
                "{} already references the agent, skipping",
                self.plugin_descriptor(section)
            );
            return Ok(());
        }
        doc.append_in_plugin(
            section,
            plugins::JMETER_ARTIFACT_ID,
            JVM_ARGS_PATH,
            &format!("<argument>{}</argument>", plugins::ARG_LINE_PLACEHOLDER),
        )?;
        debug!("wired the agent into {}", self.plugin_descriptor(section));
        Ok(())
    }
}
