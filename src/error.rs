//! Error types for boundkit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned by every constructor when a bound is invalid
//!   (zero capacity, zero window size, zero `k`). Bounds are never clamped.
//! - [`InvariantError`]: Returned by `check_invariants` methods when the
//!   internal ordering state of a structure is inconsistent.
//!
//! Lookups that find nothing (cache miss, empty window, exhausted merge) are
//! not errors; they are reported as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::error::ConfigError;
//! use boundkit::policy::lru::OrderedCache;
//!
//! let cache: Result<OrderedCache<u32, &str>, ConfigError> = OrderedCache::new(16);
//! assert!(cache.is_ok());
//!
//! let bad = OrderedCache::<u32, &str>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal ordering invariant is violated.
///
/// Produced by `check_invariants` on each structure (e.g.
/// [`OrderedCache::check_invariants`](crate::policy::lru::OrderedCache::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when a construction-time bound is invalid.
///
/// # Example
///
/// ```
/// use boundkit::stream::window_max::WindowMaximumTracker;
///
/// let err = WindowMaximumTracker::<i64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("window_size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    /// Fails with a `ConfigError` naming `what` when `value` is zero.
    pub(crate) fn require_positive(what: &str, value: usize) -> Result<usize, ConfigError> {
        if value == 0 {
            Err(Self::new(format!("{what} must be > 0, got 0")))
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed<E: std::error::Error + 'static>(err: E) -> Box<dyn std::error::Error> {
        Box::new(err)
    }

    #[test]
    fn invariant_error_carries_description() {
        let err = InvariantError::new("deque values increase between positions 0 and 1");
        assert_eq!(err.message(), "deque values increase between positions 0 and 1");
        assert_eq!(err.to_string(), err.message());
        assert_eq!(boxed(err).to_string(), "deque values increase between positions 0 and 1");
    }

    #[test]
    fn require_positive_rejects_zero() {
        let err = ConfigError::require_positive("k", 0).unwrap_err();
        assert_eq!(err.message(), "k must be > 0, got 0");
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn require_positive_passes_value_through() {
        assert_eq!(ConfigError::require_positive("window_size", 7), Ok(7));
        assert_eq!(ConfigError::require_positive("capacity", 1), Ok(1));
    }

    #[test]
    fn config_error_propagates_as_boxed_error() {
        fn build(capacity: usize) -> Result<usize, Box<dyn std::error::Error>> {
            Ok(ConfigError::require_positive("capacity", capacity)?)
        }
        let err = build(0).unwrap_err();
        assert_eq!(err.to_string(), "capacity must be > 0, got 0");
        assert_eq!(build(3).ok(), Some(3));
    }
}
