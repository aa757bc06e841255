//! Round-trip and default behavior for the shared DTOs.

use pomgraft_types::{
    AgentConfig, BuildStrategy, FileBackupInfo, IntegrationOutcome, LogLevel,
};
use pretty_assertions::assert_eq;

#[test]
fn agent_config_defaults_are_empty() {
    let cfg: AgentConfig = serde_json::from_str("{}").expect("empty config");
    assert_eq!(cfg.server_url, None);
    assert_eq!(cfg.build_strategy, BuildStrategy::OneBuild);
    assert!(!cfg.recursive);
    assert!(!cfg.log.enabled);
    assert_eq!(cfg.log.level, LogLevel::Off);
}

#[test]
fn agent_config_skips_unset_fields_when_serialized() {
    let cfg = AgentConfig {
        app_name: Some("shop".to_string()),
        ..AgentConfig::default()
    };
    let json = serde_json::to_string(&cfg).expect("serialize");
    assert!(json.contains("\"app_name\":\"shop\""));
    assert!(!json.contains("server_url"));
    assert!(!json.contains("listener_jar"));
}

#[test]
fn outcome_tags_are_snake_case() {
    let skipped = IntegrationOutcome::SkippedInvalid {
        reason: "not xml".to_string(),
    };
    let json = serde_json::to_string(&skipped).expect("serialize");
    assert!(json.contains("\"status\":\"skipped_invalid\""));
    assert!(skipped.is_skip());
    assert!(!skipped.is_failed());
}

#[test]
fn backup_info_resolves_target() {
    let in_place = FileBackupInfo::new("a/pom.xml");
    assert_eq!(in_place.resolved_target(), "a/pom.xml");

    let redirected = FileBackupInfo::with_target("a/pom.xml", "out/pom.xml");
    assert_eq!(redirected.resolved_target(), "out/pom.xml");
}

#[test]
fn build_strategy_pom_values() {
    assert_eq!(BuildStrategy::OneBuild.as_pom_value(), "ONE_BUILD");
    assert_eq!(BuildStrategy::PerModule.as_pom_value(), "EACH_MODULE");
}
