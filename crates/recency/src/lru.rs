//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in an arena addressed by `usize` handles. Slots `HEAD` and
//! `TAIL` are sentinels that never hold data, so linking and unlinking never
//! branch on list ends. The index maps each key to its arena handle; only the
//! list decides recency order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{CacheError, Result};
use crate::stats::CacheStats;

/// Head sentinel: its `next` is the most recently used entry
const HEAD: usize = 0;
/// Tail sentinel: its `prev` is the least recently used entry
const TAIL: usize = 1;

/// Upper bound on slots reserved at construction; larger caches grow on insert
const PREALLOC_LIMIT: usize = 1024;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// Arena slot. `entry` is `None` for sentinels and free slots.
struct Node<K, V> {
    entry: Option<Entry<K, V>>,
    prev: usize,
    next: usize,
}

impl<K, V> Node<K, V> {
    fn sentinel() -> Self {
        Self {
            entry: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// LRU cache with fixed capacity
///
/// `get`, `put`, `remove` and eviction all run in O(1). The arena never holds
/// more than `capacity + 2` slots; slots freed by eviction or removal are
/// reused by later inserts.
pub struct LruCache<K, V, S = RandomState> {
    map: HashMap<K, usize, S>,
    nodes: Vec<Node<K, V>>,
    free_list: Vec<usize>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new LRU cache whose index uses `hasher`
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity < 1 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let reserve = capacity.min(PREALLOC_LIMIT);
        let mut nodes = Vec::with_capacity(reserve + 2);
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(reserve, hasher),
            nodes,
            free_list: Vec::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }

    /// Get a value from the cache, marking it most recently used
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.promote(idx);
                self.value(idx)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert a key-value pair into the cache
    ///
    /// An existing key has its value replaced and is promoted. A new key
    /// evicts the least recently used entry first when the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            let slot = self.nodes[idx].entry.as_mut();
            debug_assert!(slot.is_some(), "indexed slot {} holds no entry", idx);
            if let Some(entry) = slot {
                entry.value = value;
            }
            self.promote(idx);
            self.stats.record_update();
            trace!(slot = idx, "updated entry");
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict_lru();
        }

        let idx = self.alloc_node(Entry {
            key: key.clone(),
            value,
        });
        self.link_at_head(idx);
        self.map.insert(key, idx);
        self.stats.record_insert();
        trace!(slot = idx, len = self.map.len(), "inserted entry");
    }

    /// Remove a key from the cache, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        self.free_node(idx).map(|entry| entry.value)
    }

    /// Get a value without changing its recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.value(idx)
    }

    /// Check whether a key is cached without changing its recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.evict_lru()
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let idx = self.nodes[TAIL].prev;
        if idx == HEAD {
            return None;
        }

        self.unlink(idx);
        let entry = self.free_node(idx)?;
        self.map.remove(&entry.key);
        self.stats.record_eviction();
        debug!(slot = idx, len = self.map.len(), "evicted least recently used entry");

        Some((entry.key, entry.value))
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset cache statistics
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Clear the cache, keeping its capacity and statistics
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.truncate(2);
        self.nodes[HEAD] = Node::sentinel();
        self.nodes[TAIL] = Node::sentinel();
        self.free_list.clear();
    }

    /// Most recently used entry
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.entry(self.nodes[HEAD].next)
    }

    /// Least recently used entry, the next eviction candidate
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entry(self.nodes[TAIL].prev)
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes[HEAD].next,
            back: self.nodes[TAIL].prev,
            remaining: self.map.len(),
        }
    }

    /// Iterate keys from most to least recently used
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    fn value(&self, idx: usize) -> Option<&V> {
        self.nodes[idx].entry.as_ref().map(|entry| &entry.value)
    }

    fn entry(&self, idx: usize) -> Option<(&K, &V)> {
        self.nodes[idx]
            .entry
            .as_ref()
            .map(|entry| (&entry.key, &entry.value))
    }

    fn promote(&mut self, idx: usize) {
        if self.nodes[HEAD].next == idx {
            return;
        }
        self.unlink(idx);
        self.link_at_head(idx);
    }

    /// Detaches `idx` from its neighbours; a detached slot links to itself.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[idx].prev = idx;
        self.nodes[idx].next = idx;
    }

    fn link_at_head(&mut self, idx: usize) {
        let first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = first;
        self.nodes[first].prev = idx;
        self.nodes[HEAD].next = idx;
    }

    fn alloc_node(&mut self, entry: Entry<K, V>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx].entry = Some(entry);
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                entry: Some(entry),
                prev: idx,
                next: idx,
            });
            idx
        }
    }

    fn free_node(&mut self, idx: usize) -> Option<Entry<K, V>> {
        let entry = self.nodes[idx].entry.take();
        self.free_list.push(idx);
        entry
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries in recency order
///
/// Created by [`LruCache::iter`]. Iterating does not promote entries.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.entry.as_ref().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.entry.as_ref().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
