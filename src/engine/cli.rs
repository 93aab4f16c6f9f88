//! CLI command handler: build filters, connect, run the search loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::engine::arg_parser::Cli;
use crate::engine::dates::parse_date_range;
use crate::pipeline::Filter;
use crate::remote::FtpLister;
use crate::sink::StdoutSink;
use crate::utils::{resolve_credentials, setup_logging};

/// Build the filter chain from the parsed criteria. Registration order is
/// date then pattern; the driver short-circuits in that order.
fn build_filters(time: Option<&str>, regexp: Option<&str>) -> Result<Vec<Filter>> {
    let mut filters = Vec::new();
    if let Some(t) = time {
        filters.push(Filter::Date(parse_date_range(t)?));
    }
    if let Some(pat) = regexp {
        let re = Regex::new(pat).with_context(|| format!("invalid pattern {pat:?}"))?;
        filters.push(Filter::Pattern(re));
    }
    Ok(filters)
}

/// Run one search: resolve credentials, connect, walk and stream matches.
/// Invalid date or pattern criteria abort before any connection is made.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let opts = cli.find_opts();
    let filters = build_filters(opts.time.as_deref(), opts.pattern.as_deref())?;

    let creds = resolve_credentials(cli.user.as_deref(), cli.password.as_deref())?;
    let mut lister = FtpLister::connect(&cli.host, cli.port, &creds.user, &creds.password)?;

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;

    let mut sink = StdoutSink;
    let matched = crate::find(&mut lister, &opts, &filters, &mut sink, &cancel)?;
    debug!("{} entries matched", matched);
    Ok(())
}
