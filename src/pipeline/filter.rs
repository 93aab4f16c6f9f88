//! Entry predicates and their AND-chain evaluation.

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::FindError;
use crate::types::{DateRange, Entry};

/// Listing fact holding the entry mtime, format `YYYYMMDDHHMMSS`.
const MODIFY_FACT: &str = "modify";
const MODIFY_FORMAT: &str = "%Y%m%d%H%M%S";

/// One predicate over an entry. A tagged variant per filter kind rather than
/// boxed closures, so the chain stays a plain list evaluated by a small
/// interpreter loop and new kinds slot in as variants.
#[derive(Clone, Debug)]
pub enum Filter {
    /// Mtime within an inclusive range, read from the `modify` fact.
    Date(DateRange),
    /// Path contains at least one match of the regex.
    Pattern(Regex),
}

impl Filter {
    /// Evaluate this filter against one entry.
    ///
    /// A date filter on an entry whose `modify` fact is absent or malformed
    /// is a hard [`FindError::MetadataParse`], not a silent false: date
    /// filtering is only attached on explicit request, so every traversed
    /// file is expected to carry the fact.
    pub fn matches(&self, entry: &Entry) -> Result<bool, FindError> {
        match self {
            Filter::Date(range) => {
                let raw = entry.facts.get(MODIFY_FACT).ok_or_else(|| {
                    FindError::MetadataParse {
                        path: entry.path.clone(),
                        reason: format!("no {MODIFY_FACT} fact in listing"),
                    }
                })?;
                let mtime = NaiveDateTime::parse_from_str(raw, MODIFY_FORMAT).map_err(|e| {
                    FindError::MetadataParse {
                        path: entry.path.clone(),
                        reason: format!("{MODIFY_FACT} fact {raw:?}: {e}"),
                    }
                })?;
                Ok(range.start <= mtime && mtime <= range.stop)
            }
            Filter::Pattern(re) => Ok(re.is_match(&entry.path)),
        }
    }
}

/// Logical AND over the chain, short-circuiting in registration order: the
/// first false stops evaluation, so later filters never run on a rejected
/// entry. An empty chain accepts everything.
pub fn matches_all(filters: &[Filter], entry: &Entry) -> Result<bool, FindError> {
    for f in filters {
        if !f.matches(entry)? {
            return Ok(false);
        }
    }
    Ok(true)
}
