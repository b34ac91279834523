//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on (`host:port`)
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
