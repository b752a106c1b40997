//! Error types for recency

use thiserror::Error;

/// Result type alias for cache construction
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors raised by the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Capacity must hold at least one entry
    #[error("invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = CacheError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "invalid capacity: 0 (must be at least 1)");
    }
}
