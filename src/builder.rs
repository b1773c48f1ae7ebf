//! Construction helpers for the bounded structures.
//!
//! Every structure takes a single positive bound. [`BoundBuilder`] builds any
//! of them from one bound; [`BoundConfig`] collects the bounds an embedding
//! system supplies and builds each structure from its matching field.
//! Construction is always fallible and a zero bound is never clamped.
//!
//! ## Example
//!
//! ```rust
//! use boundkit::builder::{BoundBuilder, BoundConfig};
//!
//! let mut cache = BoundBuilder::new(100).ordered_cache::<u64, String>().unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! let config = BoundConfig {
//!     cache_capacity: 256,
//!     window_size: 8,
//!     top_k: 3,
//! };
//! config.validate().unwrap();
//! let window = config.window_max::<i64>().unwrap();
//! assert_eq!(window.window_size(), 8);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lru::OrderedCache;
use crate::stream::top_k::BoundedTopK;
use crate::stream::window_max::WindowMaximumTracker;

/// Builds any bounded structure from one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundBuilder {
    bound: usize,
}

impl BoundBuilder {
    pub fn new(bound: usize) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Cache holding at most `bound` entries.
    pub fn ordered_cache<K, V>(self) -> Result<OrderedCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        OrderedCache::new(self.bound)
    }

    /// Maximum tracker over windows of `bound` values.
    pub fn window_max<T: Ord>(self) -> Result<WindowMaximumTracker<T>, ConfigError> {
        WindowMaximumTracker::new(self.bound)
    }

    /// Selector keeping the `bound` largest values.
    pub fn top_k<T: Ord>(self) -> Result<BoundedTopK<T>, ConfigError> {
        BoundedTopK::new(self.bound)
    }
}

/// Bounds for the three bounded structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundConfig {
    pub cache_capacity: usize,
    pub window_size: usize,
    pub top_k: usize,
}

impl Default for BoundConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1024,
            window_size: 16,
            top_k: 10,
        }
    }
}

impl BoundConfig {
    /// Reports the first zero bound, in field order.
    ///
    /// ```
    /// use boundkit::builder::BoundConfig;
    ///
    /// let config = BoundConfig { window_size: 0, ..BoundConfig::default() };
    /// let err = config.validate().unwrap_err();
    /// assert!(err.message().contains("window_size"));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("cache_capacity", self.cache_capacity)?;
        ConfigError::require_positive("window_size", self.window_size)?;
        ConfigError::require_positive("top_k", self.top_k)?;
        Ok(())
    }

    pub fn ordered_cache<K, V>(&self) -> Result<OrderedCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        BoundBuilder::new(self.cache_capacity).ordered_cache()
    }

    pub fn window_max<T: Ord>(&self) -> Result<WindowMaximumTracker<T>, ConfigError> {
        BoundBuilder::new(self.window_size).window_max()
    }

    pub fn top_k<T: Ord>(&self) -> Result<BoundedTopK<T>, ConfigError> {
        BoundBuilder::new(self.top_k).top_k()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_builds_every_structure() {
        let builder = BoundBuilder::new(3);
        assert_eq!(builder.bound(), 3);

        let cache = builder.ordered_cache::<u8, u8>().unwrap();
        assert_eq!(cache.capacity(), 3);

        let window = builder.window_max::<u8>().unwrap();
        assert_eq!(window.window_size(), 3);

        let top = builder.top_k::<u8>().unwrap();
        assert_eq!(top.k(), 3);
    }

    #[test]
    fn zero_bound_fails_for_every_structure() {
        let builder = BoundBuilder::new(0);
        assert!(builder.ordered_cache::<u8, u8>().is_err());
        assert!(builder.window_max::<u8>().is_err());
        assert!(builder.top_k::<u8>().is_err());
    }

    #[test]
    fn config_validate_reports_first_zero_field() {
        assert!(BoundConfig::default().validate().is_ok());

        let config = BoundConfig {
            cache_capacity: 0,
            window_size: 0,
            top_k: 0,
        };
        let err = config.validate().unwrap_err();
        assert!(err.message().starts_with("cache_capacity"));

        let config = BoundConfig {
            top_k: 0,
            ..BoundConfig::default()
        };
        assert!(config.validate().unwrap_err().message().starts_with("top_k"));
    }

    #[test]
    fn config_builds_from_matching_fields() {
        let config = BoundConfig {
            cache_capacity: 4,
            window_size: 2,
            top_k: 1,
        };
        assert_eq!(config.ordered_cache::<u32, ()>().unwrap().capacity(), 4);
        assert_eq!(config.window_max::<u32>().unwrap().window_size(), 2);
        assert_eq!(config.top_k::<u32>().unwrap().k(), 1);
    }
}
