//! FTP-backed lister over a single suppaftp session.

use anyhow::{Context, Result};
use log::{debug, warn};
use suppaftp::FtpStream;
use suppaftp::list::File;

use crate::error::FindError;
use crate::remote::{ListedItem, Lister};
use crate::types::{EntryKind, Facts};

/// Mtime fact format carried on every listed entry (UTC, second precision).
const MODIFY_FACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// One authenticated FTP session. Owns the control connection exclusively;
/// the walk issues one `LIST` per directory it visits, nothing concurrent.
pub struct FtpLister {
    stream: FtpStream,
}

impl FtpLister {
    /// Connect to `host:port` and log in. The session stays open until the
    /// lister is dropped.
    pub fn connect(host: &str, port: u16, user: &str, password: &str) -> Result<Self> {
        let mut stream = FtpStream::connect((host, port))
            .with_context(|| format!("connect to {host}:{port}"))?;
        stream
            .login(user, password)
            .with_context(|| format!("log in to {host} as {user}"))?;
        debug!("connected to {}:{} as {}", host, port, user);
        Ok(Self { stream })
    }

    fn to_item(file: File) -> ListedItem {
        let kind = if file.is_file() {
            EntryKind::File
        } else if file.is_directory() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };
        let modified = chrono::DateTime::<chrono::Utc>::from(file.modified());
        let mut facts = Facts::new();
        facts.insert(
            "modify".to_string(),
            modified.format(MODIFY_FACT_FORMAT).to_string(),
        );
        facts.insert("size".to_string(), file.size().to_string());
        facts.insert(
            "type".to_string(),
            match kind {
                EntryKind::File => "file".to_string(),
                EntryKind::Dir => "dir".to_string(),
                EntryKind::Other => "other".to_string(),
            },
        );
        ListedItem {
            name: file.name().to_string(),
            kind,
            facts,
        }
    }
}

impl Lister for FtpLister {
    fn list(&mut self, path: &str) -> Result<Vec<ListedItem>, FindError> {
        let lines = self
            .stream
            .list(Some(path))
            .map_err(|e| FindError::remote(path, e))?;
        let mut items = Vec::with_capacity(lines.len());
        for line in &lines {
            match File::try_from(line.as_str()) {
                Ok(file) => items.push(Self::to_item(file)),
                // Some servers emit summary lines ("total N") that are not
                // entries at all; those are noise, not a listing failure.
                Err(e) => warn!("unparsable listing line in {path:?}: {line:?} ({e})"),
            }
        }
        Ok(items)
    }
}

impl Drop for FtpLister {
    fn drop(&mut self) {
        let _ = self.stream.quit();
    }
}
