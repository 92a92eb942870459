//! In-memory TTL cache for API responses.
//!
//! A [`TtlCache`] keeps one slot per key. `get_or_fetch` serves fresh hits
//! without touching the loader, refetches stale entries, and may fall back
//! to a stale payload when the loader fails (degraded mode, logged as a
//! warning). Per-key slot locks guarantee at most one in-flight loader per
//! key: a second caller for the same key blocks until the first load
//! finishes, then reads the stored result instead of issuing its own.
//!
//! Time is read through the [`Clock`] trait so tests can drive staleness
//! deterministically. Nothing is persisted; the cache dies with the process.

use crate::error::{FetchError, Result};
use crate::models::DateSpec;
use ahash::AHashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Default entry lifetime (one hour, like the upstream dashboard).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Source of "now" for staleness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Canonical cache key for an indicator query. Construction trims, sorts
/// and dedups the code lists, so logically identical requests collide
/// regardless of input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entities: Vec<String>,
    pub indicators: Vec<String>,
    pub date: Option<DateSpec>,
}

fn normalize(codes: &[String]) -> Vec<String> {
    let mut out: Vec<String> = codes
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

impl QueryKey {
    /// Build a canonical key, rejecting empty code sets and inverted ranges.
    pub fn new(
        entities: &[String],
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Self> {
        let entities = normalize(entities);
        let indicators = normalize(indicators);
        if entities.is_empty() {
            return Err(FetchError::InvalidRequest(
                "at least one entity code required".into(),
            ));
        }
        if indicators.is_empty() {
            return Err(FetchError::InvalidRequest(
                "at least one indicator code required".into(),
            ));
        }
        if let Some(d) = date
            && !d.is_valid()
        {
            return Err(FetchError::InvalidRequest(format!(
                "date range start after end: {}",
                d.to_query_param()
            )));
        }
        Ok(Self {
            entities,
            indicators,
            date,
        })
    }
}

struct Slot<V> {
    stored: Option<(V, Instant)>,
}

/// TTL cache keyed by `K`, holding cloneable payloads.
pub struct TtlCache<K, V> {
    slots: Mutex<AHashMap<K, Arc<Mutex<Slot<V>>>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    serve_stale: bool,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock means a loader panicked; the slot data itself is
    // still usable.
    m.lock().unwrap_or_else(|p| p.into_inner())
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock), true)
    }

    /// Full-control constructor: explicit clock and stale-fallback switch.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>, serve_stale: bool) -> Self {
        Self {
            slots: Mutex::new(AHashMap::new()),
            ttl,
            clock,
            serve_stale,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached payload for `key` if fresh; otherwise run `loader`
    /// and store its result. On loader failure with a stale entry present,
    /// the stale payload is served instead (unless the failure is an
    /// [`FetchError::InvalidRequest`], or stale fallback is disabled).
    pub fn get_or_fetch<F>(&self, key: K, loader: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        let slot = {
            let mut slots = lock(&self.slots);
            slots
                .entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(Slot { stored: None })))
                .clone()
        };

        // Holding the slot lock for the whole load serializes loaders for
        // this key; waiters see the stored result when they get the lock.
        let mut slot = lock(&slot);
        let now = self.clock.now();
        if let Some((v, at)) = &slot.stored
            && now.duration_since(*at) < self.ttl
        {
            return Ok(v.clone());
        }

        match loader() {
            Ok(v) => {
                slot.stored = Some((v.clone(), now));
                Ok(v)
            }
            Err(e) => {
                if self.serve_stale
                    && e.allows_stale_fallback()
                    && let Some((v, at)) = &slot.stored
                {
                    log::warn!(
                        "fetch failed ({e}); serving stale entry aged {}s",
                        now.duration_since(*at).as_secs()
                    );
                    return Ok(v.clone());
                }
                Err(e)
            }
        }
    }

    /// Drop every entry older than the TTL. Returns how many were evicted.
    pub fn evict_stale(&self) -> usize {
        let now = self.clock.now();
        let mut slots = lock(&self.slots);
        let before = slots.len();
        slots.retain(|_, slot| {
            lock(slot)
                .stored
                .as_ref()
                .is_some_and(|(_, at)| now.duration_since(*at) < self.ttl)
        });
        before - slots.len()
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.slots).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
