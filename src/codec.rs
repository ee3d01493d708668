//! Padded encode/decode of identifiers
//!
//! With a salted configuration the identifier's decimal digits are prefixed
//! with a seed before base-N encoding; decoding strips exactly that many
//! leading digits again.

use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::radix;
use crate::seed::derive_seed;

/// Encode `id` into a token under `config`
pub fn encode(id: i64, config: &CodecConfig) -> Result<String, CodecError> {
    if id < 0 {
        return Err(CodecError::NegativeInput(id));
    }

    let value = if config.is_salted() {
        let seed = derive_seed(id as u64, config.salt(), config.padding())?;
        // Digits are glued, not added
        format!("{seed}{id}")
            .parse::<u128>()
            .map_err(|_| CodecError::Overflow)?
    } else {
        id as u128
    };

    let token = radix::to_string(value, config.alphabet());
    trace!(id, %token, "encoded");
    Ok(token)
}

/// Decode a token produced by [`encode`] with the same `config`
///
/// The seed digits are dropped without being checked, so any token made of
/// alphabet characters decodes to some identifier.
pub fn decode(token: &str, config: &CodecConfig) -> Result<i64, CodecError> {
    let id = decode_inner(token, config)
        .inspect_err(|e| debug!(token, error = %e, "token rejected"))?;
    trace!(token, id, "decoded");
    Ok(id)
}

fn decode_inner(token: &str, config: &CodecConfig) -> Result<i64, CodecError> {
    let digits = radix::from_string(token, config.alphabet())?.to_string();

    let id_digits = if config.salt().is_empty() {
        digits.as_str()
    } else {
        match digits.get(config.padding()..) {
            Some(rest) if !rest.is_empty() => rest,
            _ => return Err(CodecError::MalformedToken("token shorter than its padding")),
        }
    };

    if !id_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::MalformedToken("identifier is not numeric"));
    }

    id_digits.parse::<i64>().map_err(|_| CodecError::Overflow)
}

/// Token codec bound to a single configuration
///
/// Holds no mutable state; share it across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an identifier into a token
    #[inline]
    pub fn encode(&self, id: i64) -> Result<String, CodecError> {
        encode(id, &self.config)
    }

    /// Decode a token back to its identifier
    #[inline]
    pub fn decode(&self, token: &str) -> Result<i64, CodecError> {
        decode(token, &self.config)
    }
}

impl From<CodecConfig> for Codec {
    fn from(config: CodecConfig) -> Self {
        Self::new(config)
    }
}
