//! Configuration validator for the trainer
//!
//! Validates configuration values before they reach the attach/patch path.
//! The strict mode additionally rejects implausibly large offsets in patch
//! chains; production resolution trusts offsets as supplied, so strict mode
//! is an opt-in safety net for hand-edited files and tests.

use super::loader::{Config, ConfigError, LoggingConfig, PatchSpec, TargetConfig};
use std::collections::HashSet;

/// Largest offset strict mode accepts in a patch chain
const STRICT_MAX_OFFSET: usize = 0x1000_0000;

/// Configuration validator
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator {
    strict: bool,
}

impl ConfigValidator {
    /// Creates a validator with production rules only
    pub fn new() -> Self {
        ConfigValidator { strict: false }
    }

    /// Creates a validator that also rejects implausible offset chains
    pub fn strict() -> Self {
        ConfigValidator { strict: true }
    }

    /// Validates the entire configuration
    pub fn validate(&self, config: &Config) -> Result<(), ConfigError> {
        Self::validate_target(&config.target)?;
        Self::validate_logging(&config.logging)?;
        self.validate_patches(&config.patches)?;
        Ok(())
    }

    /// Validates target configuration
    fn validate_target(target: &TargetConfig) -> Result<(), ConfigError> {
        if target.process.is_empty() {
            return Err(ConfigError::Invalid(
                "Target process name cannot be empty".to_string(),
            ));
        }

        if target.module.is_empty() {
            return Err(ConfigError::Invalid(
                "Target module name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// Validates patch entries
    fn validate_patches(&self, patches: &[PatchSpec]) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for patch in patches {
            if patch.name.is_empty() {
                return Err(ConfigError::Invalid(
                    "Patch name cannot be empty".to_string(),
                ));
            }

            if !seen.insert(patch.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "Duplicate patch name: {}",
                    patch.name
                )));
            }

            // Decodes and checks the replacement/nop shape
            patch.payload()?;

            if self.strict {
                if let Some(&offset) = patch.offsets.iter().find(|&&o| o > STRICT_MAX_OFFSET) {
                    return Err(ConfigError::Invalid(format!(
                        "patch '{}': offset 0x{:X} exceeds the strict limit 0x{:X}",
                        patch.name, offset, STRICT_MAX_OFFSET
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Validates a configuration with production rules
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::new().validate(config)
}
