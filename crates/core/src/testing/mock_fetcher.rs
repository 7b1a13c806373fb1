//! Mock fetcher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::fetcher::{FetchError, Fetcher};

/// Mock implementation of the Fetcher trait.
///
/// Provides controllable behavior for testing:
/// - Track fetched URLs for assertions
/// - Configure the bytes returned
/// - Fail fetches for URLs matching a substring
/// - Simulate fetch latency
#[derive(Debug)]
pub struct MockFetcher {
    /// URLs fetched, in order.
    fetched_urls: Arc<RwLock<Vec<String>>>,
    /// Bytes returned by successful fetches.
    default_bytes: Arc<RwLock<Vec<u8>>>,
    /// Substrings of URLs whose fetch fails.
    failing_substrings: Arc<RwLock<Vec<String>>>,
    /// Simulated fetch duration in milliseconds.
    fetch_duration_ms: Arc<RwLock<u64>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Create a new mock fetcher.
    pub fn new() -> Self {
        Self {
            fetched_urls: Arc::new(RwLock::new(Vec::new())),
            default_bytes: Arc::new(RwLock::new(b"mock-image".to_vec())),
            failing_substrings: Arc::new(RwLock::new(Vec::new())),
            fetch_duration_ms: Arc::new(RwLock::new(0)),
        }
    }

    /// Get all fetched URLs, in fetch order.
    pub async fn fetched_urls(&self) -> Vec<String> {
        self.fetched_urls.read().await.clone()
    }

    /// Get the number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.fetched_urls.read().await.len()
    }

    /// Set the bytes returned by successful fetches.
    pub async fn set_default_bytes(&self, bytes: Vec<u8>) {
        *self.default_bytes.write().await = bytes;
    }

    /// Make fetches fail for any URL containing `fragment`.
    pub async fn fail_url_containing(&self, fragment: impl Into<String>) {
        self.failing_substrings.write().await.push(fragment.into());
    }

    /// Set the simulated fetch duration.
    pub async fn set_fetch_duration(&self, duration: Duration) {
        *self.fetch_duration_ms.write().await = duration.as_millis() as u64;
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetched_urls.write().await.push(url.to_string());

        let duration_ms = *self.fetch_duration_ms.read().await;
        if duration_ms > 0 {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        }

        let failing = self.failing_substrings.read().await;
        if failing.iter().any(|f| url.contains(f.as_str())) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            });
        }

        Ok(self.default_bytes.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_fetches() {
        let fetcher = MockFetcher::new();

        fetcher.fetch("http://a").await.unwrap();
        fetcher.fetch("http://b").await.unwrap();

        assert_eq!(fetcher.fetch_count().await, 2);
        assert_eq!(fetcher.fetched_urls().await, vec!["http://a", "http://b"]);
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let fetcher = MockFetcher::new();
        fetcher.fail_url_containing("1404").await;

        assert!(fetcher.fetch("http://r/202403071404.png").await.is_err());
        assert!(fetcher.fetch("http://r/202403071405.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_default_bytes() {
        let fetcher = MockFetcher::new();
        fetcher.set_default_bytes(vec![1, 2, 3]).await;

        let bytes = fetcher.fetch("http://a").await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}
