use crate::SectionIntegrator;
use crate::xml::Fragment;
use pomgraft_pom::{PomDocument, SectionId};
use pomgraft_types::{AgentConfig, plugins};
use tracing::debug;

/// Injects the agent plugin itself: a full `<plugin>` declaration with the
/// instrumentation configuration and an execution bound to the `validate`
/// phase so the agent is active before anything compiles or runs.
pub struct AgentPluginIntegrator<'a> {
    config: &'a AgentConfig,
    version: String,
}

impl<'a> AgentPluginIntegrator<'a> {
    pub fn new(config: &'a AgentConfig, version_override: Option<&str>) -> Self {
        Self {
            config,
            version: version_override
                .unwrap_or(plugins::AGENT_DEFAULT_VERSION)
                .to_string(),
        }
    }

    fn render_plugin(&self, unit: &str) -> String {
        let cfg = self.config;
        let mut f = Fragment::new(unit);
        f.open("plugin")
            .leaf("groupId", plugins::AGENT_GROUP_ID)
            .leaf("artifactId", plugins::AGENT_ARTIFACT_ID)
            .leaf("version", &self.version)
            .open("configuration")
            .leaf("enabled", "true")
            .leaf_opt("server", cfg.server_url.as_ref())
            .leaf_opt("proxy", cfg.proxy.as_ref())
            .leaf_opt("customerId", cfg.customer_id.as_ref())
            .leaf_opt("appName", cfg.app_name.as_ref())
            .leaf_opt("moduleName", cfg.module_name.as_ref())
            .leaf_opt("branchName", cfg.branch_name.as_ref())
            .leaf_opt("buildName", cfg.build_name.as_ref())
            .leaf_opt("environment", cfg.environment.as_ref())
            .leaf_opt("workspacePath", cfg.workspace_path.as_ref())
            .leaf_opt("filesIncluded", cfg.files_included.as_ref())
            .leaf_opt("filesExcluded", cfg.files_excluded.as_ref())
            .leaf_opt("packagesIncluded", cfg.packages_included.as_ref())
            .leaf_opt("packagesExcluded", cfg.packages_excluded.as_ref())
            .leaf("recursive", if cfg.recursive { "true" } else { "false" })
            .leaf_opt("listenerJar", cfg.listener_jar.as_ref())
            .leaf_opt("scannerJar", cfg.scanner_jar.as_ref())
            .leaf_opt("apiJar", cfg.api_jar.as_ref())
            .leaf_opt("listenerConfigFile", cfg.listener_config_file.as_ref())
            .leaf("buildStrategy", cfg.build_strategy.as_pom_value())
            .leaf("logEnabled", if cfg.log.enabled { "true" } else { "false" })
            .leaf("logLevel", cfg.log.level.as_pom_value())
            .leaf("logDestination", cfg.log.destination.as_pom_value())
            .leaf_opt("logFolder", cfg.log.folder.as_ref())
            .close("configuration")
            .open("executions")
            .open("execution")
            .leaf("id", "pomgraft-instrument")
            .leaf("phase", "validate")
            .open("goals")
            .leaf("goal", "instrument")
            .close("goals")
            .close("execution")
            .close("executions")
            .close("plugin");
        f.finish()
    }
}

impl SectionIntegrator for AgentPluginIntegrator<'_> {
    fn artifact_id(&self) -> &str {
        plugins::AGENT_ARTIFACT_ID
    }

    fn is_already_integrated(&self, doc: &PomDocument, section: &SectionId) -> bool {
        doc.section_has_plugin(section, plugins::AGENT_ARTIFACT_ID)
    }

    fn integrate(&self, doc: &mut PomDocument, section: &SectionId) -> anyhow::Result<()> {
        if self.is_already_integrated(doc, section) {
            debug!("{} already present, skipping", self.plugin_descriptor(section));
            return Ok(());
        }
        let fragment = self.render_plugin(&doc.indent_unit());
        doc.append_plugin(section, &fragment)?;
        debug!("added {}", self.plugin_descriptor(section));
        Ok(())
    }
}
