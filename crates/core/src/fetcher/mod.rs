//! Remote image fetch capability.

mod http;
mod traits;

pub use http::HttpFetcher;
pub use traits::Fetcher;

use thiserror::Error;

/// Errors returned by a fetch attempt.
///
/// All fetch errors are phase-local: the acquisition runner logs them and
/// moves on to the next candidate, it never aborts the cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request timed out.
    #[error("fetch timed out")]
    Timeout,

    /// Could not connect to the remote host.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The remote answered with a non-success status.
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Failed to read the response body.
    #[error("failed to read body: {0}")]
    Body(String),
}
