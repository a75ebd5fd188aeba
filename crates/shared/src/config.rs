//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Data source configuration.
    #[serde(default)]
    pub data: DataConfig,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Earliest calendar year a report may be requested for.
    ///
    /// When set, the initial balance date must fall on or before the last day
    /// of the preceding year.
    #[serde(default)]
    pub earliest_year: Option<i32>,
    /// Number of trailing months shown in the dashboard trend.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            earliest_year: None,
            trend_months: default_trend_months(),
        }
    }
}

fn default_trend_months() -> u32 {
    6
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "flowcash=info".to_string()
}

/// Data source configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Path to a JSON snapshot of accounts, transactions, and settings.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLOWCASH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "FLOWCASH__REPORT__EARLIEST_YEAR",
                "FLOWCASH__REPORT__TREND_MONTHS",
                "FLOWCASH__LOGGING__FILTER",
                "FLOWCASH__DATA__SNAPSHOT_PATH",
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.report.earliest_year, None);
        assert_eq!(config.report.trend_months, 6);
        assert_eq!(config.logging.filter, "flowcash=info");
        assert!(config.data.snapshot_path.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("FLOWCASH__REPORT__EARLIEST_YEAR", Some("2020")),
                ("FLOWCASH__REPORT__TREND_MONTHS", Some("12")),
                ("FLOWCASH__DATA__SNAPSHOT_PATH", Some("data/snapshot.json")),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.report.earliest_year, Some(2020));
        assert_eq!(config.report.trend_months, 12);
        assert_eq!(
            config.data.snapshot_path.as_deref(),
            Some("data/snapshot.json")
        );
    }
}
