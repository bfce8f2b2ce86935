//! Configuration module for the trainer
//!
//! Provides configuration loading, validation, and default settings.
//! Everything the memory-access core needs from the outside — target
//! names, offset chains, patch bytes — arrives through here as plain
//! values.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults};
pub use loader::{load_config, ConfigLoader, LoggingConfig, PatchPayload, PatchSpec, TargetConfig};
pub use validator::{validate_config, ConfigValidator};

// Re-export the main configuration structure
pub use loader::Config;

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
