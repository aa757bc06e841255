use serde::{Deserialize, Serialize};

/// The instrumentation configuration payload.
///
/// Every set field is passed through opaquely into the generated
/// `<configuration>` block of the agent plugin; pomgraft does not validate
/// the values beyond presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_path: Option<String>,

    /// Glob patterns for class files to instrument / skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_included: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_excluded: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_included: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_excluded: Option<String>,

    /// Scan class folders recursively.
    #[serde(default)]
    pub recursive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_jar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner_jar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_jar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_config_file: Option<String>,

    #[serde(default)]
    pub build_strategy: BuildStrategy,

    #[serde(default)]
    pub log: LogSettings,
}

/// One logical build per run, or one per Maven module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStrategy {
    #[default]
    OneBuild,
    PerModule,
}

impl BuildStrategy {
    /// The value written into the generated `<buildStrategy>` element.
    pub fn as_pom_value(self) -> &'static str {
        match self {
            BuildStrategy::OneBuild => "ONE_BUILD",
            BuildStrategy::PerModule => "EACH_MODULE",
        }
    }
}

/// Agent-side logging knobs, passed through into the plugin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub destination: LogDestination,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_pom_value(self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogDestination {
    #[default]
    Console,
    File,
}

impl LogDestination {
    pub fn as_pom_value(self) -> &'static str {
        match self {
            LogDestination::Console => "console",
            LogDestination::File => "file",
        }
    }
}
