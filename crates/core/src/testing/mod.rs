//! Testing utilities and mock implementations.
//!
//! Mock implementations of the external capability traits, allowing full
//! cycle testing without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use radarsweep_core::testing::{MockFetcher, MockTransformer};
//!
//! let fetcher = MockFetcher::new();
//! let transformer = MockTransformer::new();
//!
//! // Configure mock responses
//! fetcher.set_default_bytes(b"fake image".to_vec()).await;
//! fetcher.fail_url_containing("202403071404").await;
//!
//! // Use in a CycleOrchestrator...
//! ```

mod mock_fetcher;
mod mock_transformer;

pub use mock_fetcher::MockFetcher;
pub use mock_transformer::MockTransformer;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use std::path::Path;

    use crate::candidate::Candidate;

    /// A fixed instant for deterministic window tests.
    pub fn minute(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, hour, min, 0).unwrap()
    }

    /// Create a test candidate with reasonable defaults.
    pub fn candidate(instant: DateTime<Utc>, work_folder: &Path) -> Candidate {
        Candidate::derive(
            instant,
            "http://radar.test/{stamp}.png",
            work_folder,
            "png",
        )
    }
}
