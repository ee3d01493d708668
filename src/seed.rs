//! Salted padding seeds
//!
//! A seed is a short run of decimal digits derived from an identifier and a
//! salt. It is prefixed to the identifier's digits before base-N encoding so
//! that neighbouring ids produce unrelated-looking tokens.

use crate::error::CodecError;

/// Longest supported padding
///
/// A 19-digit `i64` behind an 18-digit seed still fits in a `u128`.
pub const MAX_PADDING: usize = 18;

/// Derive the padding seed for `n`
///
/// The first `padding` hex digits of `md5("{n}{salt}")` are reduced modulo
/// `10^padding`, a zero result is bumped to 1, and the decimal form is filled
/// with trailing zeros to exactly `padding` digits. The first digit is never
/// `'0'`, so the seed survives being glued in front of other digits and
/// reparsed as a number.
///
/// # Arguments
/// * `n` - The identifier being encoded
/// * `salt` - Secret mixed into the hash
/// * `padding` - Number of seed digits (1 to [`MAX_PADDING`])
pub fn derive_seed(n: u64, salt: &str, padding: usize) -> Result<String, CodecError> {
    if padding == 0 || padding > MAX_PADDING {
        return Err(CodecError::InvalidPadding {
            padding,
            max: MAX_PADDING,
        });
    }

    let hash = format!("{:x}", md5::compute(format!("{n}{salt}")));
    let prefix = u128::from_str_radix(&hash[..padding], 16).map_err(|_| CodecError::Overflow)?;

    let num = match prefix % 10u128.pow(padding as u32) {
        0 => 1,
        num => num,
    };

    Ok(format!("{num:0<padding$}"))
}
