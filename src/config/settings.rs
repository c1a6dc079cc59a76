//! User settings for ProfitFirst
//!
//! Default percentages, transfer routing, and payment provider connection
//! details. The API token is deliberately not part of the settings file.

use serde::{Deserialize, Serialize};

use super::paths::ProfitFirstPaths;
use crate::error::ProfitFirstError;
use crate::models::{AllocationPercentages, TransferRoutes};

/// Payment provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// ISO currency code sent with every transfer
    #[serde(default = "default_currency_code")]
    pub currency: String,
}

fn default_base_url() -> String {
    "https://api.airwallex.com/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency_code() -> String {
    "AUD".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
            currency: default_currency_code(),
        }
    }
}

/// User settings for ProfitFirst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Percentages the dashboard and `allocate` start from
    #[serde(default)]
    pub percentages: AllocationPercentages,

    /// Which allocation is transferred into which account
    #[serde(default)]
    pub transfer_routes: TransferRoutes,

    /// Payment provider connection
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Currency symbol used for display
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            percentages: AllocationPercentages::default(),
            transfer_routes: TransferRoutes::default(),
            provider: ProviderSettings::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ProfitFirstPaths) -> Result<Self, ProfitFirstError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - `init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ProfitFirstError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ProfitFirstError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ProfitFirstPaths) -> Result<(), ProfitFirstError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ProfitFirstError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ProfitFirstError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSlot, AllocationKind};
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.percentages.gst, 10.0);
        assert_eq!(settings.provider.currency, "AUD");
        assert_eq!(settings.provider.request_timeout_secs, 30);
        assert_eq!(
            settings.transfer_routes.allocation_for(AccountSlot::Gst),
            Some(AllocationKind::Gst)
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.percentages.vault = 45.0;
        settings.transfer_routes = TransferRoutes::default()
            .with_route(AccountSlot::Profit, AllocationKind::Vault);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.percentages.vault, 45.0);
        assert_eq!(
            loaded.transfer_routes.allocation_for(AccountSlot::Profit),
            Some(AllocationKind::Vault)
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"A$"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "A$");
        assert_eq!(settings.provider.base_url, "https://api.airwallex.com/api/v1");
        assert_eq!(settings.percentages, AllocationPercentages::default());
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProfitFirstPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ProfitFirstError::Config(_)));
    }
}
