//! Engine module: CLI surface and criterion parsing.

pub mod arg_parser;
pub mod cli;
pub mod dates;

// Re-export commonly used items
pub use arg_parser::{Cli, FormatArg};
pub use cli::handle_run;
pub use dates::{parse_date_range, parse_date_range_at};
