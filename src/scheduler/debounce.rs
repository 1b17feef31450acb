use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Keyed debouncer. Scheduling a key replaces any pending value for it and
/// restarts its window; only the last value is delivered once the window
/// passes without another call.
#[derive(Debug)]
pub struct Debouncer<K, V> {
    window: Duration,
    pending: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash + Clone, V> Debouncer<K, V> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, key: K, value: V, now: Instant) {
        self.pending.insert(key, (now + self.window, value));
    }

    pub fn cancel(&mut self, key: &K) -> Option<V> {
        self.pending.remove(key).map(|(_, value)| value)
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Remove and return every value whose window has elapsed
    pub fn take_due(&mut self, now: Instant) -> Vec<(K, V)> {
        let due: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, (deadline, _))| *deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();

        due.into_iter()
            .filter_map(|key| self.pending.remove(&key).map(|(_, value)| (key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_call_wins() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let start = Instant::now();

        debouncer.schedule("search", "b".to_string(), start);
        debouncer.schedule("search", "bu".to_string(), start + Duration::from_millis(100));
        debouncer.schedule("search", "buy".to_string(), start + Duration::from_millis(200));

        // First call's window has passed but it was superseded
        assert!(debouncer.take_due(start + Duration::from_millis(350)).is_empty());

        let due = debouncer.take_due(start + Duration::from_millis(500));
        assert_eq!(due, vec![("search", "buy".to_string())]);
        assert!(!debouncer.is_pending(&"search"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.schedule("a", 1, start);
        debouncer.schedule("b", 2, start + Duration::from_millis(80));

        let due = debouncer.take_due(start + Duration::from_millis(120));
        assert_eq!(due, vec![("a", 1)]);
        assert!(debouncer.is_pending(&"b"));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();
        debouncer.schedule("a", 1, start);

        assert_eq!(debouncer.cancel(&"a"), Some(1));
        assert!(debouncer.take_due(start + Duration::from_secs(1)).is_empty());
    }
}
