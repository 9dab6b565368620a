//! Memoization for pagination windows.
//!
//! A page of a listing typically renders the pagination control more than
//! once (top and bottom of the post list), and a site build renders every
//! page of every listing. The window calculation is cheap, but it is also
//! pure, so repeated inputs can be answered from a small cache.
//!
//! # Design
//!
//! ## Cache keys
//!
//! Lookups are keyed strictly by the `(current_page, last_page)` pair. The
//! [`WindowConfig`] is fixed for the lifetime of a cache, so it is not part
//! of the key: a different display budget needs a different cache.
//!
//! ## Eviction
//!
//! The cache is a bounded LRU. Every entry carries the tick of its last use,
//! and a tick-ordered index finds the least recently used pair to drop when
//! the cache is full. Lookups and evictions are `O(log capacity)`. A capacity
//! of `0` turns memoization off and every call computes.
//!
//! ## Transparency
//!
//! A cached answer is always identical to calling [`compute`] directly.
//! Callers get an owned clone; nothing they do with it reaches the cache.
//!
//! ## Sharing
//!
//! State sits behind a `Mutex`, so one cache can serve several pagination
//! controls at once. The lock is held only for the map lookup/insert; the
//! window is computed outside it.

use crate::window::{PageInfo, PaginationResult, WindowConfig, compute};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

type Key = (u32, u32);

#[derive(Debug)]
struct CachedWindow {
    result: PaginationResult,
    last_used: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<Key, CachedWindow>,
    /// `last_used` tick → key; the first entry is the eviction candidate.
    recency: BTreeMap<u64, Key>,
    tick: u64,
    stats: CacheStats,
}

impl CacheState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Mark `key` as just used and return its window.
    fn touch(&mut self, key: Key) -> Option<PaginationResult> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(&key)?;
        self.recency.remove(&entry.last_used);
        entry.last_used = tick;
        self.recency.insert(tick, key);
        Some(entry.result.clone())
    }

    fn insert(&mut self, key: Key, result: PaginationResult) {
        let tick = self.next_tick();
        self.recency.insert(tick, key);
        self.entries.insert(
            key,
            CachedWindow {
                result,
                last_used: tick,
            },
        );
    }

    fn evict_oldest(&mut self) -> Option<Key> {
        let (_, key) = self.recency.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }
}

/// Bounded LRU cache of pagination windows for one [`WindowConfig`].
#[derive(Debug)]
pub struct WindowCache {
    config: WindowConfig,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl WindowCache {
    pub fn new(config: WindowConfig, capacity: usize) -> Self {
        Self {
            config,
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn config(&self) -> WindowConfig {
        self.config
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the window for `info`, computing and remembering it on a miss.
    pub fn get_or_compute(&self, info: PageInfo) -> PaginationResult {
        if self.capacity == 0 {
            return compute(info, self.config);
        }
        let key = (info.current_page(), info.last_page());

        {
            let mut state = self.lock();
            if let Some(hit) = state.touch(key) {
                state.stats.hit();
                tracing::trace!(current = key.0, last = key.1, "window cache hit");
                return hit;
            }
            state.stats.miss();
        }

        let result = compute(info, self.config);
        tracing::trace!(current = key.0, last = key.1, "window cache miss");

        let mut state = self.lock();
        // Another caller may have filled the slot while we computed.
        if state.touch(key).is_none() {
            while state.entries.len() >= self.capacity {
                let Some(oldest) = state.evict_oldest() else {
                    break;
                };
                state.stats.evict();
                tracing::debug!(current = oldest.0, last = oldest.1, "window cache eviction");
            }
            state.insert(key, result.clone());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Statistics are kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.recency.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats.clone()
    }

    /// A poisoned lock only means another caller panicked mid-update; the
    /// map itself is still a valid cache, so keep using it.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for WindowCache {
    fn default() -> Self {
        Self::new(WindowConfig::default(), DEFAULT_CAPACITY)
    }
}

/// Hit/miss counters for a cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
    pub evictions: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn miss(&mut self) {
        self.misses += 1;
    }

    pub fn evict(&mut self) {
        self.evictions += 1;
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.evictions > 0 {
            write!(
                f,
                "{} cached, {} computed, {} evicted ({} total)",
                self.hits,
                self.misses,
                self.evictions,
                self.total()
            )
        } else if self.hits > 0 {
            write!(
                f,
                "{} cached, {} computed ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} computed", self.misses)
        }
    }
}
