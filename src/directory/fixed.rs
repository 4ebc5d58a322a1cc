//! In-memory host directory with a fixed account list

use super::{Account, HostDirectory, Id};
use crate::error::{IdmapError, IdmapResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Directory answering from a fixed set of users and groups
///
/// Counts every point query, which lets callers check whether a lookup was
/// served from the cache. A directory built with [`StaticDirectory::failing`]
/// returns an error for every point query.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    users: Vec<Account>,
    groups: Vec<Account>,
    failing: bool,
    queries: AtomicUsize,
}

impl StaticDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory whose point queries always fail
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Add a user account
    pub fn with_user(mut self, id: Id, name: impl Into<String>) -> Self {
        self.users.push(Account::new(id, name));
        self
    }

    /// Add a group account
    pub fn with_group(mut self, id: Id, name: impl Into<String>) -> Self {
        self.groups.push(Account::new(id, name));
        self
    }

    /// Number of point queries answered so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn find(
        &self,
        query: String,
        accounts: &[Account],
        pred: impl Fn(&Account) -> bool,
    ) -> IdmapResult<Option<Account>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(IdmapError::directory(query, "directory unavailable"));
        }
        Ok(accounts.iter().find(|a| pred(a)).cloned())
    }
}

impl HostDirectory for StaticDirectory {
    fn user_by_name(&self, name: &str) -> IdmapResult<Option<Account>> {
        self.find(format!("user {}", name), &self.users, |a| a.name == name)
    }

    fn user_by_id(&self, id: Id) -> IdmapResult<Option<Account>> {
        self.find(format!("uid {}", id), &self.users, |a| a.id == id)
    }

    fn group_by_name(&self, name: &str) -> IdmapResult<Option<Account>> {
        self.find(format!("group {}", name), &self.groups, |a| a.name == name)
    }

    fn group_by_id(&self, id: Id) -> IdmapResult<Option<Account>> {
        self.find(format!("gid {}", id), &self.groups, |a| a.id == id)
    }

    fn all_users(&self) -> IdmapResult<Vec<Account>> {
        Ok(self.users.clone())
    }

    fn all_groups(&self) -> IdmapResult<Vec<Account>> {
        Ok(self.groups.clone())
    }

    fn directory_name(&self) -> &'static str {
        "static"
    }
}
