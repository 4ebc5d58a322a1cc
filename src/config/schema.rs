//! Configuration schema for idmap
//!
//! Configuration is stored at `~/.config/idmap/config.toml`

use crate::directory::system::{DEFAULT_GROUP_PATH, DEFAULT_PASSWD_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Identity mapping settings
    pub mapping: MappingConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Identity mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Keying secret mixed into synthetic ids. Changing it changes every
    /// synthetic id, so keep it stable once ids have been handed out.
    pub salt: String,

    /// Seed the cache from the host account databases at startup
    pub seed_from_host: bool,

    /// passwd database used for seeding
    pub passwd_path: PathBuf,

    /// group database used for seeding
    pub group_path: PathBuf,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            salt: String::new(),
            seed_from_host: true,
            passwd_path: PathBuf::from(DEFAULT_PASSWD_PATH),
            group_path: PathBuf::from(DEFAULT_GROUP_PATH),
        }
    }
}
