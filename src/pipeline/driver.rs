//! Pull loop tying walker, filter chain, limit, and sink together.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::error::FindError;
use crate::pipeline::filter::{Filter, matches_all};
use crate::pipeline::walk::Walk;
use crate::remote::Lister;
use crate::sink::Sink;
use crate::types::FindOpts;

/// Consume the walk one entry at a time, forward filter survivors to the
/// sink, and stop at the configured limit or on cancellation. Returns how
/// many entries were forwarded.
///
/// Strictly pull-based: one entry in flight, no buffering, so once this loop
/// stops pulling no further listing calls happen. The cancel token is
/// checked between pulls; on interrupt the loop exits cleanly with whatever
/// was already streamed.
///
/// Limit bookkeeping counts every pulled entry, matching or not, and checks
/// the current entry's running index against the limit inside the match
/// branch, before forwarding. That reproduces the historical behavior
/// exactly, including its limit=0 edge (a matching first entry ends the run
/// with nothing forwarded; a non-matching first entry means the limit never
/// fires).
pub fn run_find<L, S>(
    lister: &mut L,
    opts: &FindOpts,
    filters: &[Filter],
    sink: &mut S,
    cancel: &AtomicBool,
) -> Result<usize, FindError>
where
    L: Lister + ?Sized,
    S: Sink + ?Sized,
{
    let mut walk = Walk::new(lister, &opts.root).enumerate();
    let mut forwarded = 0_usize;
    loop {
        if cancel.load(Ordering::Relaxed) {
            warn!("interrupted; stopping after {forwarded} matches");
            break;
        }
        let Some((seen, pulled)) = walk.next() else {
            break;
        };
        let entry = pulled?;
        if matches_all(filters, &entry)? {
            if let Some(limit) = opts.limit
                && seen == limit
            {
                debug!("limit {limit} reached at {}", entry.path);
                break;
            }
            sink.render(&entry, opts.format);
            forwarded += 1;
        }
    }
    Ok(forwarded)
}
