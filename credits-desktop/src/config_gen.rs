use std::fs;
use std::path::Path;

use credits_core::config::SystemConfig;
use credits_core::{GeneralSettings, StyleDefaults};
use serde::Serialize;

/// Shape of a complete `config.toml`, written out with every default filled
/// in so designers can see what is tunable.
#[derive(Serialize, Default)]
pub struct FullConfig {
    pub system: SystemConfig,
    pub general: GeneralSettings,
    pub defaults: StyleDefaults,
}

pub fn ensure_config_exists(path: &Path) {
    if path.exists() {
        return;
    }

    eprintln!("Creating default configuration at {:?}...", path);

    let toml_str = match toml::to_string_pretty(&FullConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        eprintln!("Config file created successfully.");
    }
}
