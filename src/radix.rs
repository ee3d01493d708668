//! Base-N conversion over an arbitrary alphabet
//!
//! The alphabet is treated as an ordered digit set: `alphabet[0]` is digit 0,
//! `alphabet[1]` digit 1 and so on, with the base equal to its length.

use crate::alphabet::Alphabet;
use crate::error::CodecError;

/// Longest possible output: a u128 written in base 2
pub const MAX_LEN: usize = 128;

/// Convert `n` to a string over `alphabet`
///
/// Zero becomes the single character `alphabet[0]`; no other result starts
/// with that character.
pub fn to_string(mut n: u128, alphabet: &Alphabet) -> String {
    let base = alphabet.base() as u128;

    if n < base {
        return (alphabet.digit(n as usize) as char).to_string();
    }

    let mut buffer = [0u8; MAX_LEN];
    let mut position = MAX_LEN;

    while n > 0 {
        position -= 1;
        buffer[position] = alphabet.digit((n % base) as usize);
        n /= base;
    }

    // Alphabet characters are ASCII, so every byte is a full char
    buffer[position..].iter().map(|&b| b as char).collect()
}

/// Convert a string over `alphabet` back to its integer value
///
/// # Returns
/// * `Result<u128, CodecError>` - the value, or an error for empty input,
///   characters outside the alphabet, and values that overflow a u128
pub fn from_string(token: &str, alphabet: &Alphabet) -> Result<u128, CodecError> {
    if token.is_empty() {
        return Err(CodecError::MalformedToken("empty token"));
    }

    let base = alphabet.base() as u128;
    let mut result: u128 = 0;

    for (position, character) in token.chars().enumerate() {
        let value = alphabet
            .index_of(character)
            .ok_or(CodecError::InvalidCharacter {
                character,
                position,
            })?;

        result = result
            .checked_mul(base)
            .and_then(|r| r.checked_add(value as u128))
            .ok_or(CodecError::Overflow)?;
    }

    Ok(result)
}
