//! Standard paths used by the orchestration CLI

use std::path::PathBuf;

/// Standard orchestration CLI paths
pub struct Paths {
    /// Config directory (~/.config/orchestration)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("orchestration");

        Self { config }
    }

    /// Default client configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.yaml")
    }
}
