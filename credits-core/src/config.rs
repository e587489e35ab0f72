use serde::{Deserialize, Serialize};

/// The `[system]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// A credits document, or a directory of them.
    pub credits_path: String,
    /// Asset root to check handles against; empty accepts every handle as-is.
    pub assets_path: String,
    /// Where resolved credits are written; empty means stdout.
    pub output_path: String,
    pub log_path: String,
    pub log_level: String,
    /// Reject sections that list the same role twice instead of warning.
    pub strict_role_names: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            credits_path: "credits/".into(),
            assets_path: String::new(),
            output_path: String::new(),
            log_path: "logs/".into(),
            log_level: "info".into(),
            strict_role_names: false,
        }
    }
}
