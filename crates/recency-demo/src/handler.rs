//! Applies trace operations to a cache

use recency::LruCache;
use tracing::{debug, info};

use crate::trace::Op;

/// Result of one applied operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New key stored; carries the entry it pushed out, if any
    Inserted { evicted: Option<(String, String)> },
    /// Existing key overwritten and promoted
    Updated,
    /// Key found and promoted; carries its value
    Hit(String),
    /// Key not cached
    Miss,
    /// Key dropped; carries its value if it was cached
    Removed(Option<String>),
}

pub struct CommandHandler {
    cache: LruCache<String, String>,
}

impl CommandHandler {
    pub fn new(cache: LruCache<String, String>) -> Self {
        Self { cache }
    }

    pub fn handle(&mut self, op: Op) -> Outcome {
        match op {
            Op::Put { key, value } => self.handle_put(key, value),
            Op::Get { key } => self.handle_get(&key),
            Op::Del { key } => self.handle_del(&key),
        }
    }

    fn handle_put(&mut self, key: String, value: String) -> Outcome {
        if self.cache.contains(&key) {
            self.cache.put(key, value);
            return Outcome::Updated;
        }

        // Capture the candidate before put() drops it
        let evicted = if self.cache.len() == self.cache.capacity() {
            self.cache
                .peek_lru()
                .map(|(k, v)| (k.clone(), v.clone()))
        } else {
            None
        };

        if let Some((k, _)) = &evicted {
            info!("Evicting {}", k);
        }
        self.cache.put(key, value);

        Outcome::Inserted { evicted }
    }

    fn handle_get(&mut self, key: &str) -> Outcome {
        match self.cache.get(key) {
            Some(value) => Outcome::Hit(value.clone()),
            None => {
                debug!("Miss for {}", key);
                Outcome::Miss
            }
        }
    }

    fn handle_del(&mut self, key: &str) -> Outcome {
        Outcome::Removed(self.cache.remove(key))
    }

    pub fn cache(&self) -> &LruCache<String, String> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{parse_trace, DEFAULT_TRACE};

    fn handler(capacity: usize) -> CommandHandler {
        CommandHandler::new(LruCache::new(capacity).unwrap())
    }

    fn put(key: &str, value: &str) -> Op {
        Op::Put {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_handler_put_get() {
        let mut handler = handler(2);

        assert_eq!(handler.handle(put("a", "1")), Outcome::Inserted { evicted: None });
        assert_eq!(
            handler.handle(Op::Get { key: "a".to_string() }),
            Outcome::Hit("1".to_string())
        );
        assert_eq!(handler.handle(Op::Get { key: "b".to_string() }), Outcome::Miss);
    }

    #[test]
    fn test_handler_reports_eviction() {
        let mut handler = handler(1);

        handler.handle(put("a", "1"));
        assert_eq!(
            handler.handle(put("b", "2")),
            Outcome::Inserted {
                evicted: Some(("a".to_string(), "1".to_string()))
            }
        );
        assert_eq!(handler.handle(put("b", "3")), Outcome::Updated);
        assert_eq!(handler.cache().len(), 1);
    }

    #[test]
    fn test_handler_del() {
        let mut handler = handler(2);

        handler.handle(put("a", "1"));
        assert_eq!(
            handler.handle(Op::Del { key: "a".to_string() }),
            Outcome::Removed(Some("1".to_string()))
        );
        assert_eq!(
            handler.handle(Op::Del { key: "a".to_string() }),
            Outcome::Removed(None)
        );
    }

    #[test]
    fn test_handler_default_trace() {
        let mut handler = handler(3);
        let outcomes: Vec<_> = parse_trace(DEFAULT_TRACE)
            .unwrap()
            .into_iter()
            .map(|op| handler.handle(op))
            .collect();

        assert_eq!(
            outcomes[3],
            Outcome::Inserted {
                evicted: Some(("day1".to_string(), "1".to_string()))
            }
        );
        assert_eq!(
            outcomes[4],
            Outcome::Inserted {
                evicted: Some(("day2".to_string(), "2".to_string()))
            }
        );
        assert_eq!(outcomes[5], Outcome::Updated);
        assert_eq!(outcomes[6], Outcome::Updated);
        assert_eq!(outcomes[7], Outcome::Hit("3".to_string()));

        let order: Vec<_> = handler.cache().keys().cloned().collect();
        assert_eq!(order, vec!["day3", "day4", "day5"]);
    }

    #[test]
    fn test_handler_default_trace_reads_lru() {
        let mut handler = handler(3);
        let mut ops = parse_trace(DEFAULT_TRACE).unwrap();
        let last = ops.pop().unwrap();

        for op in ops {
            handler.handle(op);
        }

        // day3 survives both evictions and is the next candidate when read
        assert_eq!(last, Op::Get { key: "day3".to_string() });
        assert_eq!(
            handler.cache().peek_lru(),
            Some((&"day3".to_string(), &"3".to_string()))
        );
        assert_eq!(handler.handle(last), Outcome::Hit("3".to_string()));
    }
}
