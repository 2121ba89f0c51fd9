// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use lru::LruCache;
use ndarray::ArrayView1;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::bins::BinSpec;
use super::discretizer::DiscretizedColumn;
use crate::error::Result;

/// Default number of discretized columns kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

static GLOBAL_CACHE: OnceLock<Arc<DiscretizationCache>> = OnceLock::new();

/// Content key: the bit patterns of the data and of the bin specification.
///
/// Two distinct arrays holding equal values produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    data: Vec<u64>,
    bins: BinKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BinKey {
    Count(usize),
    Edges(Vec<u64>),
}

impl CacheKey {
    fn new(data: ArrayView1<'_, f64>, spec: &BinSpec) -> Self {
        let bins = match spec {
            BinSpec::Count(n) => BinKey::Count(*n),
            BinSpec::Edges(edges) => BinKey::Edges(edges.iter().map(|e| e.to_bits()).collect()),
        };
        Self {
            data: data.iter().map(|v| v.to_bits()).collect(),
            bins,
        }
    }
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

/// Memo of discretized columns keyed by (data, bin specification) content.
///
/// Bounded; the least recently used entry is evicted first. Entries are never invalidated
/// otherwise, since inputs are treated as immutable values. Access is serialized through a
/// mutex, so one cache can be shared across threads.
pub struct DiscretizationCache {
    entries: Mutex<LruCache<CacheKey, Arc<DiscretizedColumn>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DiscretizationCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The process-wide cache, created on first use with [`DEFAULT_CACHE_CAPACITY`].
    pub fn global() -> Arc<Self> {
        GLOBAL_CACHE.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Return the cached column for this content, or compute and remember it.
    ///
    /// Failed computations are not cached.
    pub fn get_or_try_insert<F>(
        &self,
        data: ArrayView1<'_, f64>,
        spec: &BinSpec,
        compute: F,
    ) -> Result<Arc<DiscretizedColumn>>
    where
        F: FnOnce() -> Result<DiscretizedColumn>,
    {
        let key = CacheKey::new(data, spec);
        if let Some(hit) = self.entries.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(len = data.len(), ?spec, "discretization cache hit");
            return Ok(Arc::clone(hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(len = data.len(), ?spec, "discretization cache miss");
        let column = Arc::new(compute()?);

        let mut entries = self.entries.lock();
        if let Some((evicted, _)) = entries.push(key.clone(), Arc::clone(&column)) {
            if evicted != key {
                debug!(
                    capacity = entries.cap().get(),
                    evicted_len = evicted.data.len(),
                    "discretization cache evicted least recently used column"
                );
            }
        }
        Ok(column)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: entries.len(),
            capacity: entries.cap().get(),
        }
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for DiscretizationCache {
    fn default() -> Self {
        Self::new()
    }
}
