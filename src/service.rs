//! High-level data service: the in-process interface the presentation side
//! calls. Wires the API client behind the TTL caches and degrades to the
//! built-in entity tables when the network is down.

use crate::api::{Client, IndicatorSource};
use crate::cache::{Clock, DEFAULT_TTL, QueryKey, SystemClock, TtlCache};
use crate::error::{FetchError, Result};
use crate::models::{DateSpec, Entity, IndicatorRecord, Scope};
use crate::{fallback, regional};
use std::sync::Arc;
use std::time::Duration;

/// Tunables for the caching layer. Everything else (timeouts, retries)
/// lives on the [`Client`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// How long cached responses stay fresh.
    pub ttl: Duration,
    /// Serve an expired entry when a refetch fails, instead of erroring.
    pub serve_stale: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            serve_stale: true,
        }
    }
}

/// Cached facade over an [`IndicatorSource`].
pub struct DataService<S = Client> {
    source: S,
    indicator_cache: TtlCache<QueryKey, Vec<IndicatorRecord>>,
    entity_cache: TtlCache<Scope, Vec<Entity>>,
}

impl DataService<Client> {
    pub fn with_defaults() -> Self {
        Self::new(Client::default(), ServiceConfig::default())
    }
}

impl<S: IndicatorSource> DataService<S> {
    pub fn new(source: S, config: ServiceConfig) -> Self {
        Self::with_clock(source, config, Arc::new(SystemClock))
    }

    /// Construct with an explicit clock so tests can control staleness.
    pub fn with_clock(source: S, config: ServiceConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            indicator_cache: TtlCache::with_clock(config.ttl, clock.clone(), config.serve_stale),
            entity_cache: TtlCache::with_clock(config.ttl, clock, config.serve_stale),
        }
    }

    /// Fetch observations for every (entity, indicator) combination, served
    /// from cache when a fresh entry exists. Identical requests map to one
    /// cache entry regardless of code order.
    pub fn fetch_indicators(
        &self,
        entities: &[String],
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        let key = QueryKey::new(entities, indicators, date)?;
        let (e, i, d) = (key.entities.clone(), key.indicators.clone(), key.date);
        self.indicator_cache
            .get_or_fetch(key, || self.source.fetch_indicators(&e, &i, d))
    }

    /// Selectable entities for a scope. Countries come from the API (cached,
    /// with the static table as a degraded fallback); sub-national scopes
    /// are always served from the built-in tables.
    pub fn list_entities(&self, scope: Scope) -> Vec<Entity> {
        if scope != Scope::Countries {
            return fallback::list_entities(scope);
        }
        match self
            .entity_cache
            .get_or_fetch(scope, || self.source.list_countries())
        {
            Ok(list) => list,
            Err(e) => {
                log::warn!("country list unavailable ({e}); using built-in table");
                fallback::list_entities(scope)
            }
        }
    }

    /// Most recent non-null observation per (entity, indicator) pair.
    /// Pairs with no data at all are omitted.
    pub fn latest_values(
        &self,
        entities: &[String],
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        let records = self.fetch_indicators(entities, indicators, date)?;
        Ok(latest_per_pair(&records))
    }

    /// Estimated observations for a sub-national entity, derived by scaling
    /// the parent country's records.
    pub fn fetch_state_estimates(
        &self,
        state: &Entity,
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Result<Vec<IndicatorRecord>> {
        let parent = state.scope.parent_country().ok_or_else(|| {
            FetchError::InvalidRequest(format!("{} is not a sub-national entity", state.name))
        })?;
        let base = self.fetch_indicators(&[parent.to_string()], indicators, date)?;
        Ok(regional::estimate_state_records(&base, state))
    }

    /// Sweep expired entries from both caches. Returns how many were dropped.
    pub fn evict_stale(&self) -> usize {
        self.indicator_cache.evict_stale() + self.entity_cache.evict_stale()
    }

    pub fn clear_cache(&self) {
        self.indicator_cache.clear();
        self.entity_cache.clear();
    }
}

/// Reduce records to the most recent non-null value per (entity, indicator),
/// preserving first-seen pair order.
pub fn latest_per_pair(records: &[IndicatorRecord]) -> Vec<IndicatorRecord> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut best: ahash::AHashMap<(String, String), IndicatorRecord> = ahash::AHashMap::new();
    for r in records {
        if r.value.is_none() {
            continue;
        }
        let key = (r.entity_code.clone(), r.indicator_id.clone());
        let replace = match best.get(&key) {
            Some(prev) => prev.year < r.year,
            None => {
                order.push(key.clone());
                true
            }
        };
        if replace {
            best.insert(key, r.clone());
        }
    }
    order.into_iter().filter_map(|k| best.remove(&k)).collect()
}
