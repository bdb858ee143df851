//! ICAN Address Validation Module
//!
//! This crate validates and normalizes hex encoded ICAN addresses: the
//! IBAN-style account identifiers that carry a network id and a mod-97
//! checksum in front of the account payload.
//!
//! # Address Format
//!
//! An address is 44 hexadecimal characters, optionally preceded by a
//! lowercase `0x`:
//! ```text
//! [network_id:2][checksum:2][payload:40]
//! ```
//!
//! The checksum is computed over `payload + network_id + "00"`, with every hex
//! letter expanded to its two-digit decimal value, as `98 - (N mod 97)`.
//!
//! # Example
//!
//! ```rust
//! use ican_address::{validate_address, AddressError};
//!
//! let address = validate_address("0xAB720000000000000000000000000000000000000000").unwrap();
//! assert_eq!(address.as_str(), "ab720000000000000000000000000000000000000000");
//!
//! let err = validate_address("ab730000000000000000000000000000000000000000").unwrap_err();
//! assert_eq!(err, AddressError::InvalidChecksum);
//! assert_eq!(err.reason(), "Invalid Checksum");
//! ```

mod types;
mod parsing;
mod checksum;
mod validation;
mod config;
mod error;

pub use types::{Address, ParsedAddress};
pub use parsing::parse_address;
pub use checksum::{checksum_digits, compute_checksum, mod97};
pub use validation::{validate_address, validate_address_value, AddressValidator};
pub use config::{ConfigError, ValidatorConfig, NETWORK_IDS_ENV};
pub use error::AddressError;

/// Network id accepted by the default validator.
pub const DEFAULT_NETWORK_ID: &str = "ab";

/// Length of an address body once the `0x` prefix is stripped.
pub const ADDRESS_BODY_LEN: usize = 44;

/// Length of the network id and checksum segments.
pub const SEGMENT_LEN: usize = 2;

/// Length of the account payload segment.
pub const PAYLOAD_LEN: usize = ADDRESS_BODY_LEN - 2 * SEGMENT_LEN;
