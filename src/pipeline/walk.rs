//! Lazy depth-first walk over a remote tree exposed only through a
//! per-directory listing primitive.

use crate::error::FindError;
use crate::remote::{Lister, join_remote};
use crate::types::{Entry, EntryKind};

/// Pull-based depth-first pre-order traversal yielding file entries.
///
/// The generator shape is an explicit work-stack of per-directory iterators:
/// the top frame is the directory currently being drained. Files are yielded
/// the moment they are encountered; a directory entry pushes a new frame
/// right away, so its files come out before later siblings of the directory.
/// Directories themselves are recursion points only and are never yielded.
///
/// Each `list` call happens only when the walk needs it to produce the next
/// entry: the root is listed on the first pull, a subdirectory when its entry
/// is reached in the parent frame. Nothing is materialized ahead of demand
/// and no depth limit is imposed.
///
/// A listing failure is yielded once as `Err` and fuses the iterator.
pub struct Walk<'a, L: Lister + ?Sized> {
    lister: &'a mut L,
    pending_root: Option<String>,
    stack: Vec<std::vec::IntoIter<Entry>>,
    failed: bool,
}

impl<'a, L: Lister + ?Sized> Walk<'a, L> {
    pub fn new(lister: &'a mut L, root: &str) -> Self {
        Self {
            lister,
            pending_root: Some(root.to_string()),
            stack: Vec::new(),
            failed: false,
        }
    }

    fn list_frame(&mut self, dir: &str) -> Result<std::vec::IntoIter<Entry>, FindError> {
        let items = self.lister.list(dir)?;
        let entries: Vec<Entry> = items
            .into_iter()
            .map(|item| Entry {
                path: join_remote(dir, &item.name),
                kind: item.kind,
                facts: item.facts,
            })
            .collect();
        Ok(entries.into_iter())
    }

    fn push_dir(&mut self, dir: &str) -> Option<FindError> {
        match self.list_frame(dir) {
            Ok(frame) => {
                self.stack.push(frame);
                None
            }
            Err(e) => {
                self.failed = true;
                Some(e)
            }
        }
    }
}

impl<L: Lister + ?Sized> Iterator for Walk<'_, L> {
    type Item = Result<Entry, FindError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(root) = self.pending_root.take()
            && let Some(e) = self.push_dir(&root)
        {
            return Some(Err(e));
        }
        loop {
            let next = self.stack.last_mut()?.next();
            match next {
                // Top frame drained: pop back to the parent directory.
                None => {
                    self.stack.pop();
                }
                Some(entry) => match entry.kind {
                    EntryKind::File => return Some(Ok(entry)),
                    EntryKind::Dir => {
                        if let Some(e) = self.push_dir(&entry.path) {
                            return Some(Err(e));
                        }
                    }
                    EntryKind::Other => {}
                },
            }
        }
    }
}
