//! User/group identity mapping
//!
//! Resolves names to numeric ids and back, consistently for the lifetime of
//! the process, even for identities with no host account.
//!
//! # Resolution
//!
//! | Lookup | Host hit | Host miss or error |
//! |--------|----------|--------------------|
//! | name → id | host id | synthetic id from `md5(salt + name + salt)` |
//! | id → name | host name (max 49 bytes) | decimal string of the id |
//!
//! Every result is recorded in both the forward and the reverse map, so a
//! later lookup in either direction returns the same pair without touching
//! the host directory.

pub mod cache;
pub mod synthetic;

pub use cache::{IdMapping, IdentityClass, MappingSnapshot, MappingStats, MAX_NAME_LEN};
pub use synthetic::{synthetic_digest, synthetic_id};
