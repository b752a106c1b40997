//! # recency
//!
//! Fixed-capacity key-value cache with Least-Recently-Used eviction.
//!
//! ## Architecture
//! - **Index**: AHash `HashMap` from key to arena handle (O(1))
//! - **Recency list**: doubly-linked list threaded through an arena, bounded
//!   by head/tail sentinels (O(1) promote and evict)
//!
//! The cache is single-owner: every mutating call takes `&mut self`. Callers
//! that share it across threads wrap it in their own lock.
//!
//! ```
//! use recency::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3); // evicts "b"
//!
//! assert!(!cache.contains("b"));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), ["c", "a"]);
//! # Ok::<(), recency::CacheError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod lru;
mod stats;

pub use error::{CacheError, Result};
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;
