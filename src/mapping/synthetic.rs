//! Deterministic synthetic ids for names with no host account
//!
//! `id = low32(le_u64(d[0..8]) ^ le_u64(d[8..16]))` where
//! `d = md5(salt ++ name ++ salt)`.

use crate::directory::Id;
use md5::{Digest, Md5};

/// Compute the MD5 digest the synthetic id is folded from
pub fn synthetic_digest(salt: &str, name: &str) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(salt.as_bytes());
    hasher.update(name.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}

/// Derive the synthetic id for `name` under `salt`
///
/// Pure and lock-free. The result only depends on the two strings, so ids
/// stay valid across restarts that reuse the same salt.
pub fn synthetic_id(salt: &str, name: &str) -> Id {
    fold_digest(&synthetic_digest(salt, name))
}

fn fold_digest(digest: &[u8; 16]) -> Id {
    let (lo, hi) = digest.split_at(8);
    let mut a = [0u8; 8];
    let mut b = [0u8; 8];
    a.copy_from_slice(lo);
    b.copy_from_slice(hi);
    (u64::from_le_bytes(a) ^ u64::from_le_bytes(b)) as u32
}
