//! Host identity directory abstraction
//!
//! The mapping cache treats the host's account database as a read-only
//! oracle. It is injected through the [`HostDirectory`] trait so that the
//! cache can be driven by the real system (`SystemDirectory`) or by a fixed
//! in-memory account list (`StaticDirectory`).

pub mod accounts;
pub mod fixed;
pub mod system;

pub use accounts::{parse_accounts, read_accounts};
pub use fixed::StaticDirectory;
pub use system::SystemDirectory;

use crate::error::IdmapResult;
use serde::{Deserialize, Serialize};

/// Numeric user or group identifier (same width as `uid_t` / `gid_t`)
pub type Id = u32;

/// A single (id, name) account pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Account {
    /// Numeric identifier
    pub id: Id,

    /// Account name (case-sensitive)
    pub name: String,
}

impl Account {
    /// Create a new account pair
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only view of the host's user and group database
///
/// Point queries return `Ok(None)` when no such account exists. Callers in
/// this crate treat `Err` the same as `Ok(None)`.
pub trait HostDirectory: Send + Sync {
    /// Look up a user by name
    fn user_by_name(&self, name: &str) -> IdmapResult<Option<Account>>;

    /// Look up a user by numeric id
    fn user_by_id(&self, id: Id) -> IdmapResult<Option<Account>>;

    /// Look up a group by name
    fn group_by_name(&self, name: &str) -> IdmapResult<Option<Account>>;

    /// Look up a group by numeric id
    fn group_by_id(&self, id: Id) -> IdmapResult<Option<Account>>;

    /// Enumerate every known user (used for seeding)
    fn all_users(&self) -> IdmapResult<Vec<Account>>;

    /// Enumerate every known group (used for seeding)
    fn all_groups(&self) -> IdmapResult<Vec<Account>>;

    /// Human-readable directory name for logs
    fn directory_name(&self) -> &'static str;
}
