//! Application configuration
//!
//! Re-exports the shared types from folio-types and adds persistence through
//! confy (`folio/config.toml` in the platform config directory).

pub use folio_types::{AppConfig, CaretConfig, CursorConfig, DelayKind, TypewriterConfig};

use super::ConfigError;
use crate::typewriter::Typewriter;

const APP_NAME: &str = "folio";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence and editing
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn to_toml(&self) -> Result<String, ConfigError>;
    fn set_delay(&mut self, kind: DelayKind, ms: u64) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    /// Falls back to defaults when the file is missing or unreadable.
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the typewriter would refuse, leaving the config as it was.
    fn set_delay(&mut self, kind: DelayKind, ms: u64) -> Result<(), ConfigError> {
        let mut candidate = self.typewriter.clone();
        candidate.set_delay_ms(kind, ms);
        Typewriter::from_config(&candidate)?;
        self.typewriter = candidate;
        Ok(())
    }
}
