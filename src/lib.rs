//! idmap - consistent user/group identity mapping
//!
//! Resolves user and group names to numeric ids and back for a process that
//! presents filesystem ownership, including identities the host has no
//! account for. See [`mapping::IdMapping`].

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod mapping;
pub mod ui;

pub use directory::{Account, HostDirectory, Id, StaticDirectory, SystemDirectory};
pub use error::{IdmapError, IdmapResult};
pub use mapping::{synthetic_id, IdMapping};
