//! Fill-on-miss memoization.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;

/// A memoizing cache with a single atomic fetch-or-compute operation.
///
/// Each key owns a slot that is filled at most once. The slot table lock is
/// held only while looking up the slot, so different keys compute in
/// parallel while concurrent callers for the same key wait on the one
/// computation in flight. A failed computation leaves no value behind and the
/// next caller computes again; its slot is dropped once no caller waits on it.
///
/// # Example
///
/// ```
/// use cldr_core::MemoCache;
///
/// let cache: MemoCache<String, u32> = MemoCache::new();
/// let first = cache.fetch_or_compute(&"k".to_string(), || Ok::<_, ()>(7)).unwrap();
/// let second = cache.fetch_or_compute(&"k".to_string(), || Ok::<_, ()>(8)).unwrap();
/// assert_eq!((*first, *second), (7, 7));
/// ```
#[derive(Debug)]
pub struct MemoCache<K, V> {
    slots: Mutex<HashMap<K, Arc<OnceCell<Arc<V>>>>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs at most once per successful fill. Its error is returned
    /// to the caller unchanged and nothing is stored.
    pub fn fetch_or_compute<E>(
        &self,
        key: &K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        let slot = self.slot(key);
        let result = slot.get_or_try_init(|| compute().map(Arc::new)).cloned();
        if result.is_err() {
            self.evict_if_empty(key, &slot);
        }
        result
    }

    /// Return the cached value for `key` without computing.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Whether `key` holds a computed value.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &K) -> Arc<OnceCell<Arc<V>>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    /// Drop `slot` from the table if it is still empty and held only by the
    /// table and the caller.
    fn evict_if_empty(&self, key: &K, slot: &Arc<OnceCell<Arc<V>>>) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let unused = slots.get(key).is_some_and(|existing| {
            Arc::ptr_eq(existing, slot) && existing.get().is_none() && Arc::strong_count(slot) == 2
        });
        if unused {
            slots.remove(key);
        }
    }

    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn failed_compute_leaves_slot_empty() {
        let cache: MemoCache<&str, u32> = MemoCache::new();
        let err = cache.fetch_or_compute(&"k", || Err::<u32, _>("boom"));
        assert_eq!(err.unwrap_err(), "boom");
        assert!(!cache.contains(&"k"));
        assert!(cache.is_empty());
        assert_eq!(cache.slot_count(), 0);

        let value = cache.fetch_or_compute(&"k", || Ok::<_, &str>(3)).unwrap();
        assert_eq!(*value, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn repeated_misses_do_not_grow_the_table() {
        let cache: MemoCache<String, u32> = MemoCache::new();
        for i in 0..100 {
            let result = cache.fetch_or_compute(&format!("missing/{i}"), || Err::<u32, _>(()));
            assert!(result.is_err());
        }
        assert_eq!(cache.slot_count(), 0);

        cache.fetch_or_compute(&"present".to_string(), || Ok::<_, ()>(1)).unwrap();
        assert_eq!(cache.slot_count(), 1);
    }

    #[test]
    fn concurrent_callers_compute_once() {
        let cache: Arc<MemoCache<&str, usize>> = Arc::new(MemoCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    let value = cache
                        .fetch_or_compute(&"shared", || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            Ok::<_, ()>(42)
                        })
                        .unwrap();
                    *value
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
