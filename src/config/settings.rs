//! Loading codec configuration from the environment or a settings file

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{CodecConfig, CodecConfigBuilder};
use crate::error::CodecError;

/// Prefix of the environment variables read by [`CodecConfig::from_env`]
pub const ENV_PREFIX: &str = "SHORTCODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The sources could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// The values parsed but do not form a usable codec.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Raw, unvalidated codec settings
///
/// Missing fields fall back to the builder defaults. Hosts can embed this in
/// their own configuration structs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    pub alphabet: Option<String>,
    pub salt: Option<String>,
    pub padding: Option<usize>,
}

impl CodecSettings {
    /// Read `{prefix}_ALPHABET`, `{prefix}_SALT` and `{prefix}_PADDING`
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(prefix))
    }

    pub(crate) fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        // Values stay strings; parsing them eagerly would strip leading
        // zeros from a numeric alphabet or salt
        let settings = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize::<Self>()?;
        Ok(settings)
    }
}

impl TryFrom<CodecSettings> for CodecConfig {
    type Error = CodecError;

    fn try_from(settings: CodecSettings) -> Result<Self, Self::Error> {
        let mut builder = CodecConfigBuilder::new();
        if let Some(alphabet) = settings.alphabet.as_deref() {
            builder = builder.alphabet(alphabet)?;
        }
        if let Some(salt) = settings.salt {
            builder = builder.salt(salt);
        }
        if let Some(padding) = settings.padding {
            builder = builder.padding(padding)?;
        }
        Ok(builder.build())
    }
}

impl CodecConfig {
    /// Load configuration from `SHORTCODE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Load configuration from `{prefix}_*` environment variables
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let settings = CodecSettings::from_env_with_prefix(prefix)?;
        let config = CodecConfig::try_from(settings)?;
        debug!(prefix, "codec configuration loaded from environment");
        Ok(config)
    }
}
