//! Default configuration values for the trainer

use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub target: TargetDefaults,
    pub logging: LoggingDefaults,
}

/// Default target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDefaults {
    pub process: String,
    pub module: String,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        target: TargetDefaults {
            process: "Minecraft.Windows.exe".to_string(),
            module: "Minecraft.Windows.exe".to_string(),
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
        },
    }
}
