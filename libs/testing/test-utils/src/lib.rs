//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the workspace migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let mission_name = builder.name("mission", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Tests sharing one database stay apart by deriving names from their own seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_mission");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("mission", "main"), "test-mission-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic bytes, e.g. for binary columns.
    pub fn bytes(&self, len: usize) -> Vec<u8> {
        let seed = self.seed.to_le_bytes();
        (0..len).map(|i| seed[i % seed.len()] ^ (i as u8)).collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `items` are in non-decreasing order of `key`.
    pub fn assert_sorted_by_key<T, K: Ord + std::fmt::Debug>(
        items: &[T],
        key: impl Fn(&T) -> K,
        context: &str,
    ) {
        for pair in items.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a <= b, "{}: {:?} sorted before {:?}", context, a, b);
        }
    }
}
