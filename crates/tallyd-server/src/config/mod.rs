//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use tallyd_core::error::{Result, TallydError};

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallydError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| TallydError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `path` when it exists, otherwise fall back to defaults.
/// A present-but-invalid file is still a startup error.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        tracing::info!(path, "no config file, using defaults");
        Ok(ServerConfig::default())
    }
}
