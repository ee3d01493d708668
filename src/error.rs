use thiserror::Error;

/// Reasons an alphabet is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet is empty")]
    Empty,
    #[error("alphabet needs at least 2 characters, got {len}")]
    TooShort { len: usize },
    #[error("alphabet contains {0:?} more than once")]
    Duplicate(char),
    #[error("alphabet character {0:?} is not safe in a URL path")]
    NotUrlSafe(char),
}

/// Represents errors that can occur while configuring, encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The configured alphabet cannot form a bijective digit set
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),
    /// Padding length outside the supported range
    #[error("Padding length {padding} is invalid. Maximum allowed value is {max}")]
    InvalidPadding { padding: usize, max: usize },
    /// A token character is not part of the alphabet
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// The token cannot carry an identifier
    #[error("Malformed token: {0}")]
    MalformedToken(&'static str),
    /// Negative identifiers have no positional representation
    #[error("Cannot encode negative identifier {0}")]
    NegativeInput(i64),
    /// The value does not fit the numeric range
    #[error("Decoded value is out of range")]
    Overflow,
}
