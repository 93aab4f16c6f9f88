//! Search pipeline: lazy walk, filter chain, pull loop.

pub mod driver;
pub mod filter;
pub mod walk;

pub use driver::run_find;
pub use filter::{Filter, matches_all};
pub use walk::Walk;
