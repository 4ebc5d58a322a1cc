//! CLI command implementations

pub mod config;
pub mod dump;
pub mod resolve;
pub mod synth;

pub use config::execute as config;
pub use dump::execute as dump;
pub use resolve::{execute_gids as gid, execute_groups as group};
pub use resolve::{execute_uids as uid, execute_users as user};
pub use synth::execute as synth;

use crate::config::schema::MappingConfig;
use crate::directory::SystemDirectory;
use crate::mapping::IdMapping;
use std::sync::Arc;

/// Mapping options shared by every lookup command
#[derive(Debug, Clone)]
pub struct MappingOptions {
    /// Salt override from the command line
    pub salt: Option<String>,

    /// Skip seeding regardless of configuration
    pub no_seed: bool,
}

impl MappingOptions {
    /// Effective salt: command line first, then configuration
    pub fn salt<'a>(&'a self, config: &'a MappingConfig) -> &'a str {
        self.salt.as_deref().unwrap_or(&config.salt)
    }

    /// Build a mapping cache backed by the system directory
    pub fn build(&self, config: &MappingConfig) -> IdMapping {
        let directory = Arc::new(SystemDirectory::from_config(config));
        let salt = self.salt(config).to_string();

        if self.no_seed || !config.seed_from_host {
            IdMapping::unseeded(salt, directory)
        } else {
            IdMapping::new(salt, directory)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_override_wins() {
        let config = MappingConfig {
            salt: "from-config".to_string(),
            ..MappingConfig::default()
        };
        let opts = MappingOptions {
            salt: Some("from-cli".to_string()),
            no_seed: true,
        };
        assert_eq!(opts.salt(&config), "from-cli");

        let opts = MappingOptions {
            salt: None,
            no_seed: true,
        };
        assert_eq!(opts.salt(&config), "from-config");
    }

    #[test]
    fn no_seed_builds_empty_cache() {
        let opts = MappingOptions {
            salt: None,
            no_seed: true,
        };
        let mapping = opts.build(&MappingConfig::default());
        assert_eq!(mapping.stats().users, 0);
        assert_eq!(mapping.stats().groups, 0);
    }

    #[test]
    fn missing_databases_still_build() {
        let config = MappingConfig {
            passwd_path: "/nonexistent/passwd".into(),
            group_path: "/nonexistent/group".into(),
            ..MappingConfig::default()
        };
        let opts = MappingOptions {
            salt: Some("s".to_string()),
            no_seed: false,
        };
        let mapping = opts.build(&config);
        assert_eq!(mapping.stats().users, 0);
        assert_eq!(mapping.salt(), "s");
    }
}
