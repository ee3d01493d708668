//! Configuration for the token codec

mod builder;
mod settings;

use tracing::debug;

pub use builder::CodecConfigBuilder;
use builder::DEFAULT_PADDING;
pub use settings::{CodecSettings, ConfigError, ENV_PREFIX};

use crate::alphabet::Alphabet;

/// Alphabet, salt and padding shared by every encode/decode call
///
/// Tokens are only decodable with the configuration that produced them;
/// changing any field invalidates tokens issued earlier.
#[derive(Clone, PartialEq, Eq)]
pub struct CodecConfig {
    alphabet: Alphabet,
    salt: String,
    padding: usize,
}

impl CodecConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: CodecConfigBuilder) -> Self {
        let cfg = Self {
            alphabet: b.alphabet,
            salt: b.salt,
            padding: b.padding,
        };
        debug!(
            base = cfg.alphabet.base(),
            padding = cfg.padding,
            salted = cfg.is_salted(),
            "codec configured"
        );
        cfg
    }

    /// Create a new configuration builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline(always)]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    #[inline(always)]
    pub const fn padding(&self) -> usize {
        self.padding
    }

    /// Whether encode prefixes a seed (padding set and salt non-empty)
    #[inline(always)]
    pub fn is_salted(&self) -> bool {
        self.padding > 0 && !self.salt.is_empty()
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            salt: String::new(),
            padding: DEFAULT_PADDING,
        }
    }
}

impl std::fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecConfig")
            .field("alphabet", &self.alphabet)
            .field("salt", &if self.salt.is_empty() { "" } else { "<redacted>" })
            .field("padding", &self.padding)
            .finish()
    }
}
