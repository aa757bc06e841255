use pomgraft_pom::{PomDocument, SectionId};
use pomgraft_types::plugins;
use tracing::{debug, warn};

const ARG_LINE_PATH: &[&str] = &["configuration", "argLine"];

/// Ensure every surefire `argLine` references the agent placeholder.
///
/// A user-specified value is kept and the placeholder is prepended with a
/// single space separator. An absent `argLine` is left alone: the agent
/// plugin's own execution wires the agent in that case. Errors in one
/// section never stop the check of the remaining sections.
pub fn verify_surefire_arg_line_safe(doc: &mut PomDocument) {
    let sections = match doc.sections() {
        Ok(sections) => sections,
        Err(err) => {
            warn!("cannot enumerate build sections for argLine check: {err:#}");
            return;
        }
    };
    for section in sections {
        if let Err(err) = verify_section(doc, &section) {
            warn!("argLine check failed in {section}: {err:#}");
        }
    }
}

fn verify_section(doc: &mut PomDocument, section: &SectionId) -> anyhow::Result<()> {
    let Some(existing) = doc.plugin_text(section, plugins::SUREFIRE_ARTIFACT_ID, ARG_LINE_PATH)
    else {
        return Ok(());
    };
    if existing.contains(plugins::ARG_LINE_PLACEHOLDER) {
        return Ok(());
    }
    doc.prepend_plugin_text(
        section,
        plugins::SUREFIRE_ARTIFACT_ID,
        ARG_LINE_PATH,
        &format!("{} ", plugins::ARG_LINE_PLACEHOLDER),
    )?;
    debug!("prepended the agent placeholder to surefire argLine in {section}");
    Ok(())
}
