//! Output seam for matched entries.

use crate::types::{Entry, OutputFormat};

/// Rendering target for matched entries. Side-effect only; the driver never
/// reads anything back.
pub trait Sink {
    fn render(&mut self, entry: &Entry, format: OutputFormat);
}

/// Default sink: one line per match on stdout.
#[derive(Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn render(&mut self, entry: &Entry, format: OutputFormat) {
        match format {
            OutputFormat::Simple => println!("{}", entry.path),
            OutputFormat::Full => {
                let facts: Vec<String> = entry
                    .facts
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect();
                println!("{} {}", entry.path, facts.join(" "));
            }
        }
    }
}
