//! Mod-97 check digit computation.
//!
//! The checksum digest is `payload + network_id + "00"`. Every character of
//! the digest is expanded to decimal (`0`-`9` verbatim, `a`-`f` as `10`-`15`)
//! and the resulting number `N` gives the check value `98 - (N mod 97)`.
//!
//! `N` runs to roughly 88 decimal digits, so the remainder is taken by long
//! division over the digit string rather than in a fixed-width integer.

use crate::AddressError;

const MODULUS: u32 = 97;

/// Expand a lowercase hex digest into its decimal digit string.
///
/// # Returns
/// * `Ok(String)` - Concatenated decimal expansion of every character
/// * `Err(AddressError::InvalidAddress)` - A character outside `[0-9a-f]`
pub fn checksum_digits(digest: &str) -> Result<String, AddressError> {
    let mut digits = String::with_capacity(digest.len() * 2);

    for c in digest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'a'..='f' => {
                let value = c as u32 - 'a' as u32 + 10;
                digits.push_str(&value.to_string());
            }
            _ => return Err(AddressError::InvalidAddress),
        }
    }

    Ok(digits)
}

/// Remainder of an arbitrary-length decimal number modulo 97.
///
/// Characters other than ASCII decimal digits are ignored.
pub fn mod97(decimal_digits: &str) -> u32 {
    decimal_digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |remainder, digit| (remainder * 10 + digit) % MODULUS)
}

/// Compute the two check digits for a network id and payload.
///
/// Both arguments are expected in lowercase, as produced by
/// [`crate::parse_address`]; uppercase letters are rejected like any other
/// non-hex character.
///
/// # Example
/// ```rust
/// use ican_address::compute_checksum;
///
/// let checksum = compute_checksum("ab", &"0".repeat(40)).unwrap();
/// assert_eq!(checksum, "72");
/// ```
pub fn compute_checksum(network_id: &str, payload: &str) -> Result<String, AddressError> {
    let digest = format!("{}{}00", payload, network_id);
    let digits = checksum_digits(&digest)?;
    let check = 98 - mod97(&digits);
    Ok(format!("{:02}", check))
}
