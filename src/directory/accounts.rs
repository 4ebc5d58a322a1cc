//! Account database parsing for bulk enumeration
//!
//! Reads `/etc/passwd`-style and `/etc/group`-style files. Both formats are
//! colon-separated with the name in field 1 and the numeric id in field 3.

use super::{Account, Id};
use crate::error::{IdmapError, IdmapResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse an account database file
pub fn read_accounts(path: &Path) -> IdmapResult<Vec<Account>> {
    let content = fs::read_to_string(path).map_err(|e| IdmapError::AccountDbRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let accounts = parse_accounts(&content, path);
    debug!("Read {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Parse account database contents
///
/// Blank lines, `#` comments and NIS compat entries (`+`/`-`) are ignored.
/// Malformed lines are skipped rather than failing the whole enumeration.
pub fn parse_accounts(content: &str, source: &Path) -> Vec<Account> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(['+', '-']) {
                return None;
            }

            match parse_line(line) {
                Some(account) => Some(account),
                None => {
                    let err = IdmapError::AccountDbMalformed {
                        path: source.to_path_buf(),
                        line: idx + 1,
                    };
                    debug!("Skipping entry: {}", err);
                    None
                }
            }
        })
        .collect()
}

fn parse_line(line: &str) -> Option<Account> {
    let mut fields = line.split(':');
    let name = fields.next().filter(|n| !n.is_empty())?;
    let _password = fields.next()?;
    let id: Id = fields.next()?.trim().parse().ok()?;
    Some(Account::new(id, name))
}
