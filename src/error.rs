//! Error taxonomy. All three variants are fatal to the run; output already
//! streamed stays visible, signaling results up to the failure are valid but
//! incomplete.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    /// User-supplied date/duration text matched neither `YYYY-MM-DD` nor
    /// `<N>y|<N>m|<N>d`. Surfaced before any traversal begins.
    #[error("invalid date expression: {0:?}")]
    InvalidDateExpression(String),

    /// The remote listing failed mid-walk (network, protocol, auth drop).
    /// No per-directory recovery and no retry; the whole walk stops.
    #[error("remote listing failed for {path:?}")]
    RemoteListing {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An entry was expected to carry a parsable `modify` fact for date
    /// filtering and did not. Skipping it silently would make result counts
    /// misleading, so the run stops instead.
    #[error("cannot read modify time of {path:?}: {reason}")]
    MetadataParse { path: String, reason: String },
}

impl FindError {
    pub fn remote(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RemoteListing {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The remote path this error occurred at, if applicable. Callers use
    /// this to report where a walk died without matching on variants.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::RemoteListing { path, .. } | Self::MetadataParse { path, .. } => Some(path),
            Self::InvalidDateExpression(_) => None,
        }
    }
}
