pub mod credentials;
pub mod logger;

pub use credentials::{Credentials, resolve_credentials};
pub use logger::setup_logging;
