//! Process-wide cache of decoded artwork.
//!
//! Stores full-resolution decoded images keyed by source URL so that
//! navigating back to a page never re-fetches or re-decodes covers.
//! Entries are immutable once inserted; surfaces always render from a
//! derived copy, never in place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use image::RgbaImage;

/// Thread-safe decoded-image store shared between the UI loop and fetch
/// workers. Grows without bound for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ArtworkCache {
    inner: Mutex<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, Arc<RgbaImage>>,
    hits: u64,
    misses: u64,
}

impl ArtworkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the decoded image for a source URL.
    pub fn get(&self, key: &str) -> Option<Arc<RgbaImage>> {
        let mut inner = self.lock();
        match inner.entries.get(key) {
            Some(image) => {
                let image = Arc::clone(image);
                inner.hits += 1;
                Some(image)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Insert a decoded image. A duplicate insert for the same key
    /// overwrites with equivalent content: decoding the same source bytes
    /// is deterministic, so the last worker to finish wins harmlessly.
    pub fn insert(&self, key: impl Into<String>, image: Arc<RgbaImage>) {
        self.lock().entries.insert(key.into(), image);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Log hit/miss counters, typically once at shutdown.
    pub fn log_stats(&self) {
        let inner = self.lock();
        let total = inner.hits + inner.misses;
        if total > 0 {
            let hit_rate = (inner.hits as f64 / total as f64) * 100.0;
            log::debug!(
                "artwork cache: {} hits, {} misses ({:.1}% hit rate), {} entries",
                inner.hits,
                inner.misses,
                hit_rate,
                inner.entries.len()
            );
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A worker panicking mid-fetch never leaves an entry half-written,
        // so a poisoned lock is still safe to reuse.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
