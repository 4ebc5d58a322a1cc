//! Bidirectional identity mapping cache
//!
//! Every lookup runs start to finish under one lock: check the table, query
//! the host directory on a miss, fall back to a synthetic value, then record
//! the pair in both directions. Host queries are therefore serialized, which
//! keeps a single canonical mapping per identity.

use super::synthetic::synthetic_id;
use crate::directory::{Account, HostDirectory, Id};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Longest name (in bytes) recorded when resolving an id to a name
pub const MAX_NAME_LEN: usize = 49;

/// Identity class: users and groups are mapped independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityClass {
    User,
    Group,
}

impl fmt::Display for IdentityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Forward and reverse maps for one identity class
#[derive(Debug, Default)]
struct Table {
    by_name: HashMap<String, Id>,
    by_id: HashMap<Id, String>,
}

impl Table {
    fn insert(&mut self, name: String, id: Id) {
        self.by_name.insert(name.clone(), id);
        self.by_id.insert(id, name);
    }

    fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .by_id
            .iter()
            .map(|(id, name)| Account::new(*id, name.clone()))
            .collect();
        accounts.sort();
        accounts
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table,
    groups: Table,
}

impl Tables {
    fn class(&mut self, class: IdentityClass) -> &mut Table {
        match class {
            IdentityClass::User => &mut self.users,
            IdentityClass::Group => &mut self.groups,
        }
    }
}

/// Entry counts for each of the four maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingStats {
    pub users: usize,
    pub user_ids: usize,
    pub groups: usize,
    pub group_ids: usize,
}

/// Point-in-time copy of the cached mappings
#[derive(Debug, Clone, Serialize)]
pub struct MappingSnapshot {
    pub users: Vec<Account>,
    pub groups: Vec<Account>,
}

/// Process-lifetime user/group id mapping cache
///
/// Entries are only ever added or overwritten. Cloning the handle shares
/// the same tables.
#[derive(Clone)]
pub struct IdMapping {
    salt: Arc<str>,
    directory: Arc<dyn HostDirectory>,
    tables: Arc<Mutex<Tables>>,
}

impl IdMapping {
    /// Create a cache seeded from the directory's account enumeration
    ///
    /// An enumeration failure leaves that identity class unseeded; lookups
    /// still fall through to point queries.
    pub fn new(salt: impl Into<String>, directory: Arc<dyn HostDirectory>) -> Self {
        let mapping = Self::unseeded(salt, directory);

        debug!(
            "Enumerating accounts from {} directory",
            mapping.directory.directory_name()
        );
        let users = mapping.directory.all_users().unwrap_or_else(|e| {
            warn!("Could not enumerate users, starting unseeded: {}", e);
            Vec::new()
        });
        let groups = mapping.directory.all_groups().unwrap_or_else(|e| {
            warn!("Could not enumerate groups, starting unseeded: {}", e);
            Vec::new()
        });

        mapping.seed(&users, &groups);
        mapping
    }

    /// Create an empty cache without enumerating host accounts
    pub fn unseeded(salt: impl Into<String>, directory: Arc<dyn HostDirectory>) -> Self {
        let salt: String = salt.into();
        Self {
            salt: Arc::from(salt),
            directory,
            tables: Arc::new(Mutex::new(Tables::default())),
        }
    }

    /// The salt used for synthetic ids
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Resolve a user name to a uid
    pub fn resolve_user_name(&self, name: &str) -> Id {
        self.resolve_name(IdentityClass::User, name)
    }

    /// Resolve a group name to a gid
    pub fn resolve_group_name(&self, name: &str) -> Id {
        self.resolve_name(IdentityClass::Group, name)
    }

    /// Resolve a uid to a user name
    pub fn resolve_user_id(&self, id: Id) -> String {
        self.resolve_id(IdentityClass::User, id)
    }

    /// Resolve a gid to a group name
    pub fn resolve_group_id(&self, id: Id) -> String {
        self.resolve_id(IdentityClass::Group, id)
    }

    /// Bulk insert accounts, overwriting existing entries for the same keys
    pub fn seed(&self, users: &[Account], groups: &[Account]) {
        let mut tables = self.tables.lock();
        for account in users {
            tables.users.insert(account.name.clone(), account.id);
        }
        for account in groups {
            tables.groups.insert(account.name.clone(), account.id);
        }
        info!("Seeded {} users and {} groups", users.len(), groups.len());
    }

    /// Entry counts for each map
    pub fn stats(&self) -> MappingStats {
        let tables = self.tables.lock();
        MappingStats {
            users: tables.users.by_name.len(),
            user_ids: tables.users.by_id.len(),
            groups: tables.groups.by_name.len(),
            group_ids: tables.groups.by_id.len(),
        }
    }

    /// Copy of the id→name maps, sorted by id
    pub fn snapshot(&self) -> MappingSnapshot {
        let tables = self.tables.lock();
        MappingSnapshot {
            users: tables.users.accounts(),
            groups: tables.groups.accounts(),
        }
    }

    fn resolve_name(&self, class: IdentityClass, name: &str) -> Id {
        let mut tables = self.tables.lock();
        let table = tables.class(class);
        if let Some(&id) = table.by_name.get(name) {
            return id;
        }

        let found = match class {
            IdentityClass::User => self.directory.user_by_name(name),
            IdentityClass::Group => self.directory.group_by_name(name),
        };

        let id = match found {
            Ok(Some(account)) => {
                debug!("Host {} {} has id {}", class, name, account.id);
                account.id
            }
            Ok(None) => self.synthesize_id(class, name),
            Err(e) => {
                debug!("Host {} lookup failed: {}", class, e);
                self.synthesize_id(class, name)
            }
        };

        table.insert(name.to_string(), id);
        id
    }

    fn resolve_id(&self, class: IdentityClass, id: Id) -> String {
        let mut tables = self.tables.lock();
        let table = tables.class(class);
        if let Some(name) = table.by_id.get(&id) {
            return name.clone();
        }

        let found = match class {
            IdentityClass::User => self.directory.user_by_id(id),
            IdentityClass::Group => self.directory.group_by_id(id),
        };

        let mut name = match found {
            Ok(Some(account)) => account.name,
            Ok(None) => {
                debug!("No host {} with id {}, using decimal name", class, id);
                id.to_string()
            }
            Err(e) => {
                debug!("Host {} lookup failed: {}", class, e);
                id.to_string()
            }
        };
        truncate_name(&mut name);

        table.insert(name.clone(), id);
        name
    }

    fn synthesize_id(&self, class: IdentityClass, name: &str) -> Id {
        let id = synthetic_id(&self.salt, name);
        debug!("No host {} named {}, synthetic id {}", class, name, id);
        id
    }
}

impl fmt::Debug for IdMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdMapping")
            .field("directory", &self.directory.directory_name())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Cut `name` to at most [`MAX_NAME_LEN`] bytes on a char boundary
fn truncate_name(name: &mut String) {
    if name.len() <= MAX_NAME_LEN {
        return;
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name.truncate(end);
}
