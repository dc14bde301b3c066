use crate::core::{NewsdeskError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection parameters for the backing store, parsed from a TOML file.
///
/// The shape follows a conventional SQL client configuration. A file-backed
/// SQLite store only consumes `database` (as the file path); the network
/// fields are recognized so a bootstrap layer can supply one config for any
/// engine, and are simply ignored by providers that do not dial out.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub database: String,
    pub user: Option<String>,
    pub secret: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Loads connection configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConnectionConfig> {
    let content = fs::read_to_string(path).map_err(|e| NewsdeskError::Config(e.to_string()))?;
    toml::from_str(&content).map_err(|e| NewsdeskError::Config(e.to_string()))
}
