//! Validator configuration.

use std::env;
use thiserror::Error;

/// Environment variable holding the comma-separated accepted network ids.
pub const NETWORK_IDS_ENV: &str = "ICAN_NETWORK_IDS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Accepted network ids, lowercase, two hex characters each.
    pub network_ids: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            network_ids: vec![crate::DEFAULT_NETWORK_ID.to_string()],
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to the default network when `ICAN_NETWORK_IDS` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(NETWORK_IDS_ENV) {
            Ok(value) => Self::from_network_list(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                Err(ConfigError::Invalid(NETWORK_IDS_ENV.to_string()))
            }
        }
    }

    /// Parse a comma-separated list such as `"ab, cb"`.
    pub fn from_network_list(list: &str) -> Result<Self, ConfigError> {
        let network_ids = list
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(normalize_network_id)
            .collect::<Result<Vec<_>, _>>()?;

        if network_ids.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{}: no network ids",
                NETWORK_IDS_ENV
            )));
        }

        log::info!("Accepted network ids: {}", network_ids.join(","));
        Ok(Self { network_ids })
    }
}

/// Check a network id is two hex characters and lowercase it.
pub(crate) fn normalize_network_id(id: &str) -> Result<String, ConfigError> {
    if id.len() != crate::SEGMENT_LEN || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::Invalid(format!("network id {:?}", id)));
    }
    Ok(id.to_ascii_lowercase())
}
