use eyre::Result;
use serde::{Deserialize, Serialize};

#[allow(unused_imports)]
use super::CONFIG;

use super::constants::{
    DASHBOARD_TITLE, DATE_FORMAT, FALLBACK_TITLE, HEARTBEAT_SECS, LOG_FILE_PATH, TICKETS_SCHEMA,
    TICKETS_TABLE,
};
use super::defaults::*;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub keywords: KeywordsConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "log_level")]
    pub level: Option<String>,

    #[serde(default)]
    pub filters: Option<Vec<LogFilter>>,

    #[serde(default)]
    pub file: LogFile,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFilter {
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogFile {
    #[serde(default = "log_file_path")]
    pub path: String,

    #[serde(default)]
    pub append: bool,
}

/// Where tickets live. `url` and `api_key` may reference environment
/// variables as `$VAR` or `${VAR}`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "tickets_schema")]
    pub schema: String,

    #[serde(default = "tickets_table")]
    pub table: String,

    #[serde(default)]
    pub timeout_secs: Option<u16>,

    #[serde(default)]
    pub realtime: RealtimeConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RealtimeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "heartbeat_secs")]
    pub heartbeat_secs: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DashboardConfig {
    #[serde(default = "dashboard_title")]
    pub title: String,

    #[serde(default = "fallback_title")]
    pub fallback_title: String,

    #[serde(default = "date_format")]
    pub date_format: String,

    /// Drop live rows whose id was already seen.
    #[serde(default)]
    pub dedup_by_id: bool,
}

/// Overrides for the title vocabularies. Unset lists keep the built-in
/// defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,

    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    #[serde(default)]
    pub technical: Option<Vec<String>>,

    #[serde(default)]
    pub business: Option<Vec<String>>,
}

impl Configuration {
    #[cfg(not(test))]
    pub fn instance() -> &'static Configuration {
        CONFIG.get().expect("Config not initialized")
    }

    #[cfg(not(test))]
    pub fn init(config: Configuration) -> Result<()> {
        CONFIG
            .set(config)
            .map_err(|_| eyre::eyre!("Config already initialized"))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn instance() -> &'static Configuration {
        use super::TEST_CONFIG;
        TEST_CONFIG.with(|config| *config.borrow())
    }

    #[cfg(test)]
    pub fn init(config: Configuration) -> Result<()> {
        use super::TEST_CONFIG;
        TEST_CONFIG.with(|test_config| {
            *test_config.borrow_mut() = Box::leak(Box::new(config));
        });
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            file: LogFile::default(),
            filters: None,
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: LOG_FILE_PATH.to_string(),
            append: false,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: None,
            schema: TICKETS_SCHEMA.to_string(),
            table: TICKETS_TABLE.to_string(),
            timeout_secs: None,
            realtime: RealtimeConfig::default(),
        }
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            heartbeat_secs: HEARTBEAT_SECS,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            fallback_title: FALLBACK_TITLE.to_string(),
            date_format: DATE_FORMAT.to_string(),
            dedup_by_id: false,
        }
    }
}
