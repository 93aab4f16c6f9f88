//! ftpfind: recursive find over one FTP session.
//!
//! The remote tree is reachable only through a per-directory listing call on
//! a stateful session, so the walk is a lazy, pull-based depth-first
//! traversal: one listing in flight at a time, each issued only when the
//! next entry is actually demanded. Filters compose by short-circuit AND;
//! an optional limit and a cancellation token stop the pull loop early.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod remote;
pub mod sink;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::FindError;
pub use types::*;

use std::sync::atomic::AtomicBool;

use log::debug;

use crate::pipeline::Filter;
use crate::remote::Lister;
use crate::sink::Sink;

/// Single entry point: walk the tree under `opts.root` through `lister`,
/// stream filter survivors to `sink` until the limit is hit, the tree is
/// exhausted, or `cancel` is raised. Returns the forwarded count.
///
/// `filters` are evaluated in slice order with short-circuit AND; build them
/// from user criteria with [`engine::parse_date_range`] and `regex`.
pub fn find<L, S>(
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
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    pipeline::run_find(lister, opts, filters, sink, cancel)
}
