//! Server configuration
//!
//! Reads config from env vars (a `.env` file is honoured by the binary):
//!   SHOWCASE_BIND_ADDR       - listen address (default: 0.0.0.0:3000)
//!   SHOWCASE_CATALOG         - YAML file replacing the builtin catalog (optional)
//!   SHOWCASE_STATIC_DIR      - directory served under /static (optional)
//!   SHOWCASE_MAX_UPLOAD_MB   - request body limit for the form (default: 200)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_path: None,
            static_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = non_empty("SHOWCASE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let max_upload_mb = match non_empty("SHOWCASE_MAX_UPLOAD_MB") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(mb) if mb > 0 => mb,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "SHOWCASE_MAX_UPLOAD_MB",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        let max_upload_bytes = max_upload_mb.checked_mul(1024 * 1024).ok_or_else(|| {
            ConfigError::InvalidNumber {
                var: "SHOWCASE_MAX_UPLOAD_MB",
                value: max_upload_mb.to_string(),
            }
        })?;

        Ok(Self {
            bind_addr,
            catalog_path: non_empty("SHOWCASE_CATALOG").map(PathBuf::from),
            static_dir: non_empty("SHOWCASE_STATIC_DIR").map(PathBuf::from),
            max_upload_bytes,
        })
    }
}
