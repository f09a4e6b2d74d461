//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] by reading an [`AppConfig`] from a JSON file.
//! Missing fields fall back to their defaults; every loaded config is
//! validated before it is handed to the domain.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::ConfigPort;
use crate::config::AppConfig;
use crate::error::ConfigError;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a config from a JSON string.
    pub fn parse(json: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = serde_json::from_str(json).map_err(|e| {
            warn!("config: JSON parse failed: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::Io,
        })?;
        let config = Self::parse(&json)?;
        info!("config: loaded {}", self.path.display());
        Ok(config)
    }
}
