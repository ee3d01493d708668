//! Ordered digit sets for the base-N codec
//!
//! A character's position in the alphabet is its digit value, so the
//! alphabet must be free of duplicates for the encoding to stay bijective.

use std::fmt;

use once_cell::sync::Lazy;

use crate::error::AlphabetError;

/// Character set used by the shortener service when none is configured
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Conventional base62 ordering (0-9, a-z, A-Z)
pub const BASE62_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Marks bytes that are not part of the alphabet in the lookup table
const NOT_A_DIGIT: u8 = u8::MAX;

static DEFAULT: Lazy<Alphabet> = Lazy::new(|| Alphabet::build(DEFAULT_ALPHABET.as_bytes()));

/// Validated digit set with a reverse lookup table
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Box<[u8]>,
    lookup: [u8; 128],
}

impl Alphabet {
    /// Validate `chars` and build the lookup table
    ///
    /// Characters must be unreserved in URLs (`A-Z`, `a-z`, `0-9`, `-`, `.`,
    /// `_`, `~`), distinct, and there must be at least two of them.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut seen = [false; 128];
        for c in chars.chars() {
            if !is_url_unreserved(c) {
                return Err(AlphabetError::NotUrlSafe(c));
            }
            let slot = &mut seen[c as usize];
            if *slot {
                return Err(AlphabetError::Duplicate(c));
            }
            *slot = true;
        }

        if chars.len() < 2 {
            return Err(AlphabetError::TooShort { len: chars.len() });
        }

        Ok(Self::build(chars.as_bytes()))
    }

    /// Assemble from bytes already known to be valid
    fn build(chars: &[u8]) -> Self {
        let mut lookup = [NOT_A_DIGIT; 128];
        for (i, &c) in chars.iter().enumerate() {
            lookup[c as usize] = i as u8;
        }
        Self {
            chars: chars.into(),
            lookup,
        }
    }

    /// Number of digits, i.e. the radix
    #[inline(always)]
    pub fn base(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Character for digit value `digit`
    ///
    /// Callers must pass `digit < base()`.
    #[inline(always)]
    pub(crate) fn digit(&self, digit: usize) -> u8 {
        self.chars[digit]
    }

    /// Digit value of `c`, or `None` when `c` is not in the alphabet
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        match self.lookup[c as usize] {
            NOT_A_DIGIT => None,
            value => Some(value as u32),
        }
    }

    /// Whether `c` is one of the alphabet's characters
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }
}

/// Characters that appear verbatim in a URL path segment
#[inline]
pub fn is_url_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl Default for Alphabet {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(chars: &str) -> Result<Self, Self::Error> {
        Self::new(chars)
    }
}

impl std::str::FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(chars: &str) -> Result<Self, Self::Err> {
        Self::new(chars)
    }
}
