//! Database configuration from TOML (`[database]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_DB_DIRNAME: &str = "trivia-api";
const DEFAULT_DB_FILENAME: &str = "trivia.db";

/// Raw database configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// SQLite file; defaults to `<data dir>/trivia-api/trivia.db`
    pub path: Option<PathBuf>,
    /// Use a throwaway in-memory database instead of a file
    pub in_memory: bool,
    /// Load the starter categories and questions into an empty database
    pub seed: bool,
}

impl FileDatabaseConfig {
    /// The file to open, or `None` when running in memory.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.in_memory {
            return None;
        }
        self.path.clone().or_else(Self::default_path)
    }

    /// `<data dir>/trivia-api/trivia.db`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .map(|d| d.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }
}
