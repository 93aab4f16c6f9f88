//! Remote session seam: the listing trait the walker drives, plus the
//! FTP-backed implementation.

pub mod ftp;

pub use ftp::FtpLister;

use crate::error::FindError;
use crate::types::{EntryKind, Facts};

/// One immediate child of a listed directory, before the walker qualifies it
/// with its parent path.
#[derive(Clone, Debug)]
pub struct ListedItem {
    pub name: String,
    pub kind: EntryKind,
    pub facts: Facts,
}

/// A source of directory listings over one stateful remote session.
///
/// `list` returns the immediate children of `path` only (non-recursive); the
/// walker calls it once per directory actually visited. Implementations own
/// the session handle exclusively for the lifetime of a traversal — the core
/// never issues concurrent calls on it.
///
/// Errors are fatal to the walk: the walker surfaces them as
/// [`FindError::RemoteListing`] and stops. Reconnect logic is the
/// implementation's business, not the core's.
pub trait Lister {
    fn list(&mut self, path: &str) -> Result<Vec<ListedItem>, FindError>;
}

/// Join a child name onto a remote directory path with the single-`/`
/// convention used throughout the traversal.
pub fn join_remote(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}
