//! Host account directory backed by the system's NSS lookups
//!
//! Point queries go through `getpwnam_r`/`getpwuid_r`/`getgrnam_r`/
//! `getgrgid_r` (via `nix`), so they see every configured NSS source.
//! Enumeration reads the flat passwd/group files.

use super::{read_accounts, Account, HostDirectory, Id};
use crate::config::schema::MappingConfig;
use crate::error::{IdmapError, IdmapResult};
use nix::unistd::{Gid, Group, Uid, User};
use std::path::PathBuf;

/// Default passwd database location
pub const DEFAULT_PASSWD_PATH: &str = "/etc/passwd";

/// Default group database location
pub const DEFAULT_GROUP_PATH: &str = "/etc/group";

/// The real host directory
#[derive(Debug, Clone)]
pub struct SystemDirectory {
    passwd_path: PathBuf,
    group_path: PathBuf,
}

impl SystemDirectory {
    /// Create a directory using the default database paths
    pub fn new() -> Self {
        Self::with_paths(DEFAULT_PASSWD_PATH, DEFAULT_GROUP_PATH)
    }

    /// Create a directory enumerating from custom database files
    pub fn with_paths(passwd_path: impl Into<PathBuf>, group_path: impl Into<PathBuf>) -> Self {
        Self {
            passwd_path: passwd_path.into(),
            group_path: group_path.into(),
        }
    }

    /// Create a directory from mapping configuration
    pub fn from_config(config: &MappingConfig) -> Self {
        Self::with_paths(&config.passwd_path, &config.group_path)
    }
}

impl Default for SystemDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDirectory for SystemDirectory {
    fn user_by_name(&self, name: &str) -> IdmapResult<Option<Account>> {
        let user = User::from_name(name)
            .map_err(|e| IdmapError::directory(format!("getpwnam({})", name), e))?;
        Ok(user.map(|u| Account::new(u.uid.as_raw(), u.name)))
    }

    fn user_by_id(&self, id: Id) -> IdmapResult<Option<Account>> {
        let user = User::from_uid(Uid::from_raw(id))
            .map_err(|e| IdmapError::directory(format!("getpwuid({})", id), e))?;
        Ok(user.map(|u| Account::new(u.uid.as_raw(), u.name)))
    }

    fn group_by_name(&self, name: &str) -> IdmapResult<Option<Account>> {
        let group = Group::from_name(name)
            .map_err(|e| IdmapError::directory(format!("getgrnam({})", name), e))?;
        Ok(group.map(|g| Account::new(g.gid.as_raw(), g.name)))
    }

    fn group_by_id(&self, id: Id) -> IdmapResult<Option<Account>> {
        let group = Group::from_gid(Gid::from_raw(id))
            .map_err(|e| IdmapError::directory(format!("getgrgid({})", id), e))?;
        Ok(group.map(|g| Account::new(g.gid.as_raw(), g.name)))
    }

    fn all_users(&self) -> IdmapResult<Vec<Account>> {
        read_accounts(&self.passwd_path)
    }

    fn all_groups(&self) -> IdmapResult<Vec<Account>> {
        read_accounts(&self.group_path)
    }

    fn directory_name(&self) -> &'static str {
        "system"
    }
}
