//! ftpfind CLI: search a remote FTP tree by mtime and path pattern.

use anyhow::Result;
use clap::Parser;
use ftpfind::engine::arg_parser::Cli;
use ftpfind::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
