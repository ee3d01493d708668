//! CodecConfig builder for constructing configuration

use super::CodecConfig;
use crate::alphabet::Alphabet;
use crate::error::CodecError;
use crate::seed::MAX_PADDING;

/// Default configuration values
pub(super) const DEFAULT_PADDING: usize = 1;

/// Builder for CodecConfig
#[derive(Debug)]
pub struct CodecConfigBuilder {
    pub(super) alphabet: Alphabet,
    pub(super) salt: String,
    pub(super) padding: usize,
}

impl CodecConfigBuilder {
    /// Create a new CodecConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::default(),
            salt: String::new(),
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the character set used as digits
    pub fn alphabet(mut self, chars: &str) -> Result<Self, CodecError> {
        self.alphabet = Alphabet::new(chars)?;
        Ok(self)
    }

    /// Use an already validated alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the salt; an empty salt disables seed padding
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Set the number of seed digits (0 to 18); 0 disables seed padding
    pub fn padding(mut self, padding: usize) -> Result<Self, CodecError> {
        if padding > MAX_PADDING {
            return Err(CodecError::InvalidPadding {
                padding,
                max: MAX_PADDING,
            });
        }
        self.padding = padding;
        Ok(self)
    }

    /// Build the final CodecConfig
    pub fn build(self) -> CodecConfig {
        CodecConfig::from_builder(self)
    }
}

impl Default for CodecConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
