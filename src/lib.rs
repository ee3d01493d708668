//! # shortcode
//!
//! Reversible short tokens for integer identifiers.
//!
//! An identifier (typically a database primary key) is written in base N over
//! a configurable alphabet. With a salt and a padding length set, a few
//! hash-derived decimal digits are glued in front of the identifier first, so
//! that consecutive ids do not yield consecutive tokens.
//!
//! ```
//! use shortcode::{Codec, CodecConfig};
//!
//! let config = CodecConfig::builder().salt("pepper").padding(2)?.build();
//! let codec = Codec::new(config);
//!
//! let token = codec.encode(1234)?;
//! assert_eq!(codec.decode(&token)?, 1234);
//! # Ok::<(), shortcode::CodecError>(())
//! ```
//!
//! The salt only discourages casual enumeration. It is not a secret in any
//! cryptographic sense.

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod codec;
mod config;
mod error;
pub mod radix;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export main types
pub use alphabet::{Alphabet, BASE62_ALPHABET, DEFAULT_ALPHABET};
pub use codec::{decode, encode, Codec};
pub use crate::config::{CodecConfig, CodecConfigBuilder, CodecSettings, ConfigError, ENV_PREFIX};
pub use error::{AlphabetError, CodecError};
pub use seed::{derive_seed, MAX_PADDING};
