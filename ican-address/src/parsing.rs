//! Address parsing from strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{AddressError, ParsedAddress, SEGMENT_LEN};

/// Optional lowercase `0x` followed by exactly 44 hex characters.
static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]{44}$").expect("Invalid address regex"));

/// Whether `address_str` has the shape of an address.
pub(crate) fn is_address_shaped(address_str: &str) -> bool {
    ADDRESS_REGEX.is_match(address_str)
}

/// Strip a literal lowercase `0x` prefix.
///
/// `0X` is left in place; the shape check has already rejected it.
pub(crate) fn strip_prefix(address_str: &str) -> &str {
    address_str.strip_prefix("0x").unwrap_or(address_str)
}

/// Parse an address string into its segments.
///
/// Only the shape is checked here; network id and checksum are verified by
/// [`crate::AddressValidator`].
///
/// # Arguments
/// * `address_str` - The address, with or without `0x`
///
/// # Returns
/// * `Ok(ParsedAddress)` - Lowercase network id, checksum and payload
/// * `Err(AddressError::InvalidAddressShape)` - Not `(0x)?` + 44 hex chars
pub fn parse_address(address_str: &str) -> Result<ParsedAddress, AddressError> {
    if !is_address_shaped(address_str) {
        return Err(AddressError::InvalidAddressShape);
    }

    // ASCII only past the regex, so byte offsets are char offsets.
    let body = strip_prefix(address_str).to_ascii_lowercase();
    let (network_id, rest) = body.split_at(SEGMENT_LEN);
    let (checksum, payload) = rest.split_at(SEGMENT_LEN);

    Ok(ParsedAddress {
        network_id: network_id.to_string(),
        checksum: checksum.to_string(),
        payload: payload.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "ab870123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_parse_segments() {
        let parsed = parse_address(BODY).unwrap();

        assert_eq!(parsed.network_id, "ab");
        assert_eq!(parsed.checksum, "87");
        assert_eq!(parsed.payload, "0123456789abcdef0123456789abcdef01234567");
        assert_eq!(parsed.payload.len(), crate::PAYLOAD_LEN);
    }

    #[test]
    fn test_parse_strips_prefix_and_lowercases() {
        let parsed = parse_address(&format!("0x{}", BODY.to_uppercase())).unwrap();
        assert_eq!(parsed.body(), BODY);
    }

    #[test]
    fn test_parse_rejects_uppercase_prefix() {
        let result = parse_address(&format!("0X{}", BODY));
        assert_eq!(result, Err(AddressError::InvalidAddressShape));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(parse_address(&BODY[..43]), Err(AddressError::InvalidAddressShape));
        assert_eq!(
            parse_address(&format!("{}0", BODY)),
            Err(AddressError::InvalidAddressShape)
        );
        assert_eq!(parse_address(""), Err(AddressError::InvalidAddressShape));
        assert_eq!(parse_address("0x"), Err(AddressError::InvalidAddressShape));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let with_g = format!("{}g", &BODY[..43]);
        assert_eq!(parse_address(&with_g), Err(AddressError::InvalidAddressShape));

        let with_space = format!(" {}", BODY);
        assert_eq!(parse_address(&with_space), Err(AddressError::InvalidAddressShape));

        let with_newline = format!("{}\n", BODY);
        assert_eq!(parse_address(&with_newline), Err(AddressError::InvalidAddressShape));
    }

    #[test]
    fn test_strip_prefix_is_case_sensitive() {
        assert_eq!(strip_prefix("0xab"), "ab");
        assert_eq!(strip_prefix("0Xab"), "0Xab");
        assert_eq!(strip_prefix("ab"), "ab");
    }
}
