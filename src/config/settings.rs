//! User settings for budget-saver
//!
//! Manages the report file name, display currency, message pacing and how the
//! savings chart is shown.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// How the savings chart is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Chart window on a terminal, text bars otherwise
    #[default]
    Auto,
    /// Always open the chart window
    Window,
    /// Always print text bars
    Text,
}

/// User settings for budget-saver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Report file name, relative to the data directory unless absolute
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Base delay between progress messages of the sheet reset, in milliseconds
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    #[serde(default)]
    pub chart: ChartMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_report_file() -> String {
    "budget_report.csv".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_pacing_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            report_file: default_report_file(),
            currency_symbol: default_currency(),
            pacing_ms: default_pacing_ms(),
            chart: ChartMode::default(),
        }
    }
}

impl Settings {
    /// Pacing delay as a Duration
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.report_file, "budget_report.csv");
        assert_eq!(settings.pacing(), Duration::from_secs(1));
        assert_eq!(settings.chart, ChartMode::Auto);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.pacing_ms = 0;
        settings.chart = ChartMode::Text;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.pacing_ms, 0);
        assert_eq!(loaded.chart, ChartMode::Text);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"chart": "window"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.chart, ChartMode::Window);
        assert_eq!(loaded.report_file, "budget_report.csv");
    }

    #[test]
    fn test_invalid_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
