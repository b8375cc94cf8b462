//! Error taxonomy for upstream data sources.
//!
//! No error here ever crosses the public estimator/planner boundary:
//! `UpstreamUnavailable` on the primary source triggers full simulation,
//! `ParseFailure` on the secondary source degrades to "no enrichment",
//! and a failed sample point during route planning degrades only that
//! point's contribution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream service was unreachable or answered non-2xx.
    #[error("upstream source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A response arrived but its payload could not be interpreted.
    #[error("upstream payload unparsable: {0}")]
    ParseFailure(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::UpstreamUnavailable(err.to_string())
    }
}
