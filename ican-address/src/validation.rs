//! Address validation functions.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::normalize_network_id;
use crate::parsing::parse_address;
use crate::{compute_checksum, Address, AddressError, ConfigError, ValidatorConfig};

static DEFAULT_VALIDATOR: Lazy<AddressValidator> = Lazy::new(AddressValidator::new);

/// Validates addresses for a fixed set of network ids.
///
/// The default validator accepts only [`crate::DEFAULT_NETWORK_ID`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressValidator {
    network_ids: BTreeSet<String>,
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressValidator {
    /// Create a validator for the default network.
    pub fn new() -> Self {
        Self {
            network_ids: BTreeSet::from([crate::DEFAULT_NETWORK_ID.to_string()]),
        }
    }

    /// Create a validator accepting the given network ids.
    ///
    /// Ids are matched case-insensitively. Each must be two hex characters
    /// and at least one must be given.
    pub fn with_networks<I, S>(network_ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let network_ids = network_ids
            .into_iter()
            .map(|id| normalize_network_id(id.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        if network_ids.is_empty() {
            return Err(ConfigError::Invalid("no network ids".to_string()));
        }

        Ok(Self { network_ids })
    }

    /// Create a validator from loaded configuration.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        Self::with_networks(&config.network_ids)
    }

    /// Whether `network_id` is accepted by this validator.
    pub fn accepts_network(&self, network_id: &str) -> bool {
        self.network_ids.contains(&network_id.to_ascii_lowercase())
    }

    /// Accepted network ids, lowercase and sorted.
    pub fn network_ids(&self) -> impl Iterator<Item = &str> {
        self.network_ids.iter().map(String::as_str)
    }

    /// Validate an address string and return its canonical form.
    ///
    /// Checks run in order and the first failure is returned: shape, network
    /// id, checksum digest, checksum value.
    ///
    /// # Arguments
    /// * `address_str` - The address, with or without a lowercase `0x`
    ///
    /// # Returns
    /// * `Ok(Address)` - The lowercase 44-character body
    /// * `Err(AddressError)` - The reason the address was rejected
    pub fn validate(&self, address_str: &str) -> Result<Address, AddressError> {
        self.check(address_str).map_err(|e| {
            log::debug!("Rejected address {:?}: {}", address_str, e);
            e
        })
    }

    /// Validate a dynamically typed value.
    ///
    /// Anything other than a JSON string fails with
    /// [`AddressError::NotAString`].
    pub fn validate_value(&self, value: &Value) -> Result<Address, AddressError> {
        match value {
            Value::String(address_str) => self.validate(address_str),
            other => {
                log::debug!("Rejected non-string address value: {}", other);
                Err(AddressError::NotAString)
            }
        }
    }

    /// Boolean form of [`AddressValidator::validate`].
    ///
    /// With `canonical_only` set, the input must also already be in canonical
    /// form: lowercase and without the `0x` prefix.
    pub fn is_valid(&self, address_str: &str, canonical_only: bool) -> bool {
        match self.validate(address_str) {
            Ok(address) => !canonical_only || address.as_str() == address_str,
            Err(_) => false,
        }
    }

    fn check(&self, address_str: &str) -> Result<Address, AddressError> {
        let parsed = parse_address(address_str)?;

        if !self.accepts_network(&parsed.network_id) {
            return Err(AddressError::InvalidNetworkId);
        }

        let expected = compute_checksum(&parsed.network_id, &parsed.payload)?;
        if expected != parsed.checksum {
            return Err(AddressError::InvalidChecksum);
        }

        Ok(Address::from_canonical(parsed.body()))
    }
}

/// Validate an address against the default network.
///
/// # Example
/// ```rust
/// use ican_address::validate_address;
///
/// let address = validate_address("ab720000000000000000000000000000000000000000").unwrap();
/// assert_eq!(address.network_id(), "ab");
/// ```
pub fn validate_address(address_str: &str) -> Result<Address, AddressError> {
    DEFAULT_VALIDATOR.validate(address_str)
}

/// Validate a dynamically typed value against the default network.
pub fn validate_address_value(value: &Value) -> Result<Address, AddressError> {
    DEFAULT_VALIDATOR.validate_value(value)
}
