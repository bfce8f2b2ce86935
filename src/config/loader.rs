//! Configuration loader for the trainer
//!
//! Handles loading configuration from TOML files and merging with defaults.
//! Patch replacement bytes arrive as hex strings and are decoded on demand;
//! offset chains deserialize directly into [`OffsetChain`].

use super::defaults::default_config;
use crate::core::types::OffsetChain;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target")]
    pub target: TargetConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default, rename = "patch")]
    pub patches: Vec<PatchSpec>,
}

/// Target process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_process")]
    pub process: String,
    #[serde(default = "default_module")]
    pub module: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// A single configured patch: an offset chain seeded at the module base,
/// and either replacement bytes or an instruction-neutralizing nop run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchSpec {
    pub name: String,

    #[serde(default)]
    pub offsets: OffsetChain,

    /// Hex-encoded replacement bytes, e.g. `"9090C3"`
    #[serde(default)]
    pub replacement: Option<String>,

    /// Number of bytes to overwrite with the no-op opcode
    #[serde(default)]
    pub nop: Option<usize>,
}

/// What a patch writes once its destination is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchPayload {
    Bytes(Vec<u8>),
    Nop(usize),
}

impl PatchSpec {
    /// Decodes this entry's payload.
    ///
    /// Exactly one of `replacement` and `nop` must be set; anything else is
    /// an invalid configuration.
    pub fn payload(&self) -> Result<PatchPayload, ConfigError> {
        match (&self.replacement, self.nop) {
            (Some(hex_bytes), None) => {
                let bytes = hex::decode(hex_bytes).map_err(|err| {
                    ConfigError::Invalid(format!(
                        "patch '{}': invalid replacement hex: {}",
                        self.name, err
                    ))
                })?;
                if bytes.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "patch '{}': replacement must not be empty",
                        self.name
                    )));
                }
                Ok(PatchPayload::Bytes(bytes))
            }
            (None, Some(size)) => {
                if size == 0 {
                    return Err(ConfigError::Invalid(format!(
                        "patch '{}': nop size must be at least 1",
                        self.name
                    )));
                }
                Ok(PatchPayload::Nop(size))
            }
            (Some(_), Some(_)) => Err(ConfigError::Invalid(format!(
                "patch '{}': replacement and nop are mutually exclusive",
                self.name
            ))),
            (None, None) => Err(ConfigError::Invalid(format!(
                "patch '{}': one of replacement or nop is required",
                self.name
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: default_target(),
            logging: default_logging(),
            patches: Vec::new(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if file doesn't exist
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|_| Config::default())
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    let loader = ConfigLoader::new("trainer.toml");
    Ok(loader.load_or_default())
}

// Default functions for serde
fn default_target() -> TargetConfig {
    let defaults = default_config();
    TargetConfig {
        process: defaults.target.process,
        module: defaults.target.module,
    }
}

fn default_logging() -> LoggingConfig {
    let defaults = default_config();
    LoggingConfig {
        level: defaults.logging.level,
    }
}

// Individual field defaults
fn default_process() -> String {
    default_config().target.process
}

fn default_module() -> String {
    default_config().target.module
}

fn default_log_level() -> String {
    default_config().logging.level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_struct() {
        let config = Config::default();
        assert_eq!(config.target.process, "Minecraft.Windows.exe");
        assert_eq!(config.logging.level, "info");
        assert!(config.patches.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [target]
            process = "Minecraft.Windows.exe"
            module = "Minecraft.Windows.exe"

            [logging]
            level = "debug"

            [[patch]]
            name = "reach"
            offsets = [0x1D8, 0x330, 0x8]
            replacement = "9090909090"

            [[patch]]
            name = "timer"
            offsets = [0x260]
            nop = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.patches.len(), 2);

        let reach = &config.patches[0];
        assert_eq!(reach.name, "reach");
        assert_eq!(reach.offsets.as_slice(), &[0x1D8, 0x330, 0x8]);
        assert_eq!(
            reach.payload().unwrap(),
            PatchPayload::Bytes(vec![0x90; 5])
        );

        let timer = &config.patches[1];
        assert_eq!(timer.payload().unwrap(), PatchPayload::Nop(6));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "warn"
            "#,
        )
        .unwrap();

        assert_eq!(config.target.process, "Minecraft.Windows.exe");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_payload_rejects_bad_hex() {
        let spec = PatchSpec {
            name: "bad".to_string(),
            offsets: OffsetChain::empty(),
            replacement: Some("90ZZ".to_string()),
            nop: None,
        };
        let err = spec.payload().unwrap_err();
        assert!(err.to_string().contains("invalid replacement hex"));
    }

    #[test]
    fn test_payload_rejects_empty_replacement() {
        let spec = PatchSpec {
            name: "empty".to_string(),
            offsets: OffsetChain::empty(),
            replacement: Some(String::new()),
            nop: None,
        };
        assert!(spec.payload().is_err());
    }

    #[test]
    fn test_payload_requires_exactly_one_kind() {
        let both = PatchSpec {
            name: "both".to_string(),
            offsets: OffsetChain::empty(),
            replacement: Some("90".to_string()),
            nop: Some(1),
        };
        assert!(both.payload().is_err());

        let neither = PatchSpec {
            name: "neither".to_string(),
            offsets: OffsetChain::empty(),
            replacement: None,
            nop: None,
        };
        assert!(neither.payload().is_err());
    }

    #[test]
    fn test_payload_rejects_zero_nop() {
        let spec = PatchSpec {
            name: "zero".to_string(),
            offsets: OffsetChain::empty(),
            replacement: None,
            nop: Some(0),
        };
        assert!(spec.payload().is_err());
    }

    #[test]
    fn test_loader_missing_file() {
        let loader = ConfigLoader::new("definitely_missing_trainer.toml");
        assert!(matches!(
            loader.load().unwrap_err(),
            ConfigError::FileNotFound(_)
        ));

        // load_or_default falls back silently
        let config = loader.load_or_default();
        assert_eq!(config.target.process, "Minecraft.Windows.exe");
    }
}
