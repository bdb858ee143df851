//! Error types for address operations.

use thiserror::Error;

/// Reasons an address is rejected.
///
/// Checks run in a fixed order and the first failing one is reported, so
/// exactly one variant describes any rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AddressError {
    /// The input value is not a string.
    #[error("Address is not a string")]
    NotAString,

    /// The input is not an optional `0x` followed by 44 hex characters.
    #[error("Invalid address")]
    InvalidAddressShape,

    /// The network id is not one the validator accepts.
    #[error("Invalid Network ID")]
    InvalidNetworkId,

    /// A non-hex character reached the checksum digest.
    #[error("Invalid Address")]
    InvalidAddress,

    /// The embedded checksum does not match the recomputed one.
    #[error("Invalid Checksum")]
    InvalidChecksum,
}

impl AddressError {
    /// The fixed reason string reported to callers.
    pub fn reason(&self) -> &'static str {
        match self {
            AddressError::NotAString => "Address is not a string",
            AddressError::InvalidAddressShape => "Invalid address",
            AddressError::InvalidNetworkId => "Invalid Network ID",
            AddressError::InvalidAddress => "Invalid Address",
            AddressError::InvalidChecksum => "Invalid Checksum",
        }
    }
}
