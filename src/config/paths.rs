//! Path management for ProfitFirst
//!
//! Provides XDG-compliant path resolution for configuration, data, and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `PROFITFIRST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/profitfirst` or `~/.config/profitfirst`
//! 3. Windows: `%APPDATA%\profitfirst`

use std::path::PathBuf;

use crate::error::ProfitFirstError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PROFITFIRST_DATA_DIR";

/// Manages all paths used by ProfitFirst
#[derive(Debug, Clone)]
pub struct ProfitFirstPaths {
    /// Base directory for all ProfitFirst data
    base_dir: PathBuf,
}

impl ProfitFirstPaths {
    /// Create a new ProfitFirstPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ProfitFirstError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ProfitFirstPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/profitfirst/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/profitfirst/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("profitfirst.log")
    }

    /// Get the path to accounts.json
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ProfitFirstError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ProfitFirstError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            ProfitFirstError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if ProfitFirst has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ProfitFirstError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("profitfirst"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ProfitFirstError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("profitfirst"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ProfitFirstError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ProfitFirstError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("profitfirst"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("profitfirst.log"));
        assert_eq!(
            paths.accounts_file(),
            temp_dir.path().join("data").join("accounts.json")
        );
    }
}
