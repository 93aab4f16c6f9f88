//! Public types for the ftpfind API and pipeline.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// Raw per-item metadata as reported by the remote listing, keyed by fact
/// name (`modify`, `size`, `type`, ...). BTreeMap so full-format output is
/// deterministic.
pub type Facts = BTreeMap<String, String>;

/// One remote object: fully qualified path (single `/` separator, relative
/// to the traversal root) plus its listing facts.
#[derive(Clone, Debug)]
pub struct Entry {
    pub path: String,
    pub kind: EntryKind,
    pub facts: Facts,
}

/// Kind of a listed remote object, derived from the server's type tag.
///
/// Anything that is neither a regular file nor a directory (symlinks, device
/// nodes, unrecognized tags) maps to [`EntryKind::Other`] and is neither
/// yielded nor recursed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// Inclusive instant range for mtime filtering. `start <= stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
}

/// Output shape for matched entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Path only, one per line.
    #[default]
    Simple,
    /// Path followed by the full fact mapping.
    Full,
}

/// Flat search configuration handed to the pipeline driver. Assembled
/// upstream (CLI or lib caller); the core never reads raw argument text.
#[derive(Clone, Debug)]
pub struct FindOpts {
    /// Traversal root on the remote server.
    pub root: String,
    /// Mtime criterion: `YYYY-MM-DD` or `<N>y|<N>m|<N>d`. None = no date filter.
    pub time: Option<String>,
    /// Regular expression matched against entry paths. None = no pattern filter.
    pub pattern: Option<String>,
    /// Stop the traversal once this many pulled entries have gone by. None = unbounded.
    pub limit: Option<usize>,
    /// Output shape for matched entries.
    pub format: OutputFormat,
}

impl Default for FindOpts {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
            time: None,
            pattern: None,
            limit: None,
            format: OutputFormat::Simple,
        }
    }
}
