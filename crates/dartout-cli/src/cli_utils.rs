//! Common CLI utility functions shared across commands.

use std::path::Path;

use dartout_core::Config;
use tracing::{info, warn};

/// Load the config file, falling back to defaults when it is missing or
/// malformed.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!("No config at {:?}, using defaults", path);
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}
