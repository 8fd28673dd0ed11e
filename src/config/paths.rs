//! Path management for budget-saver
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory (`--data-dir` flag or `BUDGET_SAVER_DATA_DIR`)
//! 2. Platform data directory from `directories` (e.g. `~/.local/share/budget-saver`)
//! 3. `./.budget-saver` when no home directory can be determined

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_SAVER_DATA_DIR";

/// Manages all paths used by budget-saver
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all budget-saver data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths, preferring an explicitly requested directory
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let base_dir = explicit.unwrap_or_else(default_base_dir);
        Self { base_dir }
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path of the report file named in the settings
    ///
    /// Absolute names are used as-is; relative names live in the base directory.
    pub fn report_file(&self, file_name: &str) -> PathBuf {
        let candidate = Path::new(file_name);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn default_base_dir() -> PathBuf {
    ProjectDirs::from("", "", "budget-saver")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".budget-saver"))
}
