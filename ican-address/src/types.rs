//! Core types for ICAN addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// An address split into its positional segments.
///
/// All segments are lowercase. A `ParsedAddress` has passed the shape check
/// only; its network id and checksum are not yet verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedAddress {
    /// Network identifier (2 hex chars).
    pub network_id: String,
    /// Embedded check digits (2 hex chars).
    pub checksum: String,
    /// Account payload (40 hex chars).
    pub payload: String,
}

impl ParsedAddress {
    /// The string the checksum is computed over.
    ///
    /// The checksum slot is zeroed and moved behind the network id.
    pub fn digest(&self) -> String {
        let mut digest = String::with_capacity(crate::ADDRESS_BODY_LEN);
        digest.push_str(&self.payload);
        digest.push_str(&self.network_id);
        digest.push_str("00");
        digest
    }

    /// The lowercase 44-character body, as it appeared in the input.
    pub fn body(&self) -> String {
        format!("{}{}{}", self.network_id, self.checksum, self.payload)
    }
}

/// A validated address in canonical form.
///
/// The canonical form is the lowercase 44-character body without the `0x`
/// prefix. Deserializing an `Address` runs full validation against the
/// default network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Wrap a canonical body. Callers must have validated it.
    pub(crate) fn from_canonical(body: String) -> Self {
        Self(body)
    }

    /// The canonical address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Network id segment.
    pub fn network_id(&self) -> &str {
        &self.0[..crate::SEGMENT_LEN]
    }

    /// Check digit segment.
    pub fn checksum(&self) -> &str {
        &self.0[crate::SEGMENT_LEN..2 * crate::SEGMENT_LEN]
    }

    /// Account payload segment.
    pub fn payload(&self) -> &str {
        &self.0[2 * crate::SEGMENT_LEN..]
    }

    /// Consume into the canonical string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validate_address(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        crate::validate_address(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_PAYLOAD: &str = "0000000000000000000000000000000000000000";

    #[test]
    fn test_digest_moves_checksum_slot() {
        let parsed = ParsedAddress {
            network_id: "ab".to_string(),
            checksum: "72".to_string(),
            payload: ZERO_PAYLOAD.to_string(),
        };

        let digest = parsed.digest();
        assert_eq!(digest.len(), 44);
        assert!(digest.starts_with(ZERO_PAYLOAD));
        assert!(digest.ends_with("ab00"));
        assert_eq!(parsed.body(), format!("ab72{}", ZERO_PAYLOAD));
    }

    #[test]
    fn test_address_segments() {
        let address: Address = format!("ab72{}", ZERO_PAYLOAD).parse().unwrap();

        assert_eq!(address.network_id(), "ab");
        assert_eq!(address.checksum(), "72");
        assert_eq!(address.payload(), ZERO_PAYLOAD);
        assert_eq!(address.to_string(), address.as_str());
    }

    #[test]
    fn test_address_from_str_rejects_invalid() {
        let result: Result<Address, _> = "not an address".parse();
        assert_eq!(result, Err(AddressError::InvalidAddressShape));
    }

    #[test]
    fn test_address_serde_roundtrip() {
        let address: Address = format!("0xAB72{}", ZERO_PAYLOAD).parse().unwrap();

        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"ab72{}\"", ZERO_PAYLOAD));

        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, address);
    }

    #[test]
    fn test_address_deserialize_reports_reason() {
        let json = format!("\"ab73{}\"", ZERO_PAYLOAD);
        let err = serde_json::from_str::<Address>(&json).unwrap_err();
        assert!(err.to_string().contains("Invalid Checksum"));

        let err = serde_json::from_str::<Address>("12345").unwrap_err();
        assert!(err.is_data());
    }
}
