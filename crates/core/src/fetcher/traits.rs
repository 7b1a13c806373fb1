//! Trait definition for the fetch capability.

use async_trait::async_trait;

use super::FetchError;

/// Fetches one remote resource by URL.
///
/// The core does not specify retry or auth; implementations own their own
/// timeout policy.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the name of this fetcher implementation.
    fn name(&self) -> &str;

    /// Fetch the resource at `url` and return its bytes.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
