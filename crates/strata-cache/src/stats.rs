//! Hit/miss statistics collection.

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::trace;

/// A running latency aggregate for one lookup path.
///
/// Latencies are tracked in whole microseconds. The average is an
/// online mean (`avg' = (avg * count + sample) / (count + 1)`), not a
/// windowed or decaying one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LatencyAggregate {
    /// Number of observations.
    pub count: u64,
    /// Smallest observed latency, in microseconds.
    pub min_us: u64,
    /// Largest observed latency, in microseconds.
    pub max_us: u64,
    /// Online mean latency, in microseconds.
    pub avg_us: u64,
}

impl LatencyAggregate {
    fn record(&mut self, sample_us: u64) {
        self.avg_us = (self.avg_us * self.count + sample_us) / (self.count + 1);
        self.count += 1;
        if self.count == 1 {
            self.min_us = sample_us;
            self.max_us = sample_us;
        } else {
            self.min_us = self.min_us.min(sample_us);
            self.max_us = self.max_us.max(sample_us);
        }
    }
}

/// A point-in-time copy of both aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsSnapshot {
    /// Lookups served from the in-memory cache.
    pub hit: LatencyAggregate,
    /// Lookups that consulted at least one source and succeeded.
    pub miss: LatencyAggregate,
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} (min={}us avg={}us max={}us) | misses={} (min={}us avg={}us max={}us)",
            self.hit.count,
            self.hit.min_us,
            self.hit.avg_us,
            self.hit.max_us,
            self.miss.count,
            self.miss.min_us,
            self.miss.avg_us,
            self.miss.max_us,
        )
    }
}

/// Thread-safe hit/miss statistics collector.
///
/// Every update is applied under one mutex so `count`, `min`, `max`
/// and the running average always change as a single unit; readers
/// never observe a torn intermediate state. Each update also emits a
/// trace event on the `strata_cache::stats` target, which deployments
/// chasing throughput can silence independently of the rest of the
/// cache's logging.
#[derive(Debug, Default)]
pub struct CacheStatistics {
    totals: Mutex<StatisticsSnapshot>,
}

impl CacheStatistics {
    /// Creates a collector with all aggregates at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latency of a lookup served from the cache.
    pub fn record_hit(&self, elapsed: Duration) {
        let mut totals = self.totals.lock();
        totals.hit.record(as_micros(elapsed));
        trace!(target: "strata_cache::stats", "{}", totals);
    }

    /// Records the latency of a lookup resolved through the sources.
    pub fn record_miss(&self, elapsed: Duration) {
        let mut totals = self.totals.lock();
        totals.miss.record(as_micros(elapsed));
        trace!(target: "strata_cache::stats", "{}", totals);
    }

    /// Returns a copy of the current aggregates.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        *self.totals.lock()
    }

    /// Zeroes all eight aggregate fields as one atomic unit.
    pub fn reset(&self) {
        *self.totals.lock() = StatisticsSnapshot::default();
    }
}

fn as_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
