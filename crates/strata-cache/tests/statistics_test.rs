//! Statistics behavior across the public API.

mod common;

use strata_cache::{CacheSettings, DocumentCache, StatisticsSnapshot};
use strata_sources::SourceRegistry;

use common::{init_tracing, single_file_source, write_document};

#[test]
fn one_miss_then_nine_hits() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_document(dir.path(), "k", "<doc/>");

    let config = single_file_source(dir.path());
    let cache = DocumentCache::from_config(&config, &SourceRegistry::with_builtins());
    cache.reset_statistics();

    for _ in 0..10 {
        cache.get("k").unwrap();
    }

    let snapshot = cache.statistics().unwrap();
    assert_eq!(snapshot.miss.count, 1);
    assert_eq!(snapshot.hit.count, 9);
    assert!(snapshot.hit.min_us <= snapshot.hit.avg_us);
    assert!(snapshot.hit.avg_us <= snapshot.hit.max_us);
}

#[test]
fn disabled_statistics_collect_nothing() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_document(dir.path(), "k", "<doc/>");

    let config = single_file_source(dir.path());
    let settings = CacheSettings::from_config(&config).with_statistics(false);
    let cache = DocumentCache::with_sources(
        settings,
        SourceRegistry::with_builtins().build(&config),
    );

    for _ in 0..10 {
        cache.get("k").unwrap();
    }

    assert!(cache.statistics().is_none());
}

#[test]
fn reset_zeroes_the_aggregates() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_document(dir.path(), "k", "<doc/>");

    let config = single_file_source(dir.path());
    let cache = DocumentCache::from_config(&config, &SourceRegistry::with_builtins());

    cache.get("k").unwrap();
    cache.get("k").unwrap();
    assert_ne!(cache.statistics().unwrap(), StatisticsSnapshot::default());

    cache.reset_statistics();
    assert_eq!(cache.statistics().unwrap(), StatisticsSnapshot::default());
}

#[test]
fn failed_lookups_leave_no_trace() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let config = single_file_source(dir.path());
    let cache = DocumentCache::from_config(&config, &SourceRegistry::with_builtins());

    for _ in 0..5 {
        let _ = cache.get("ghost");
    }

    assert_eq!(cache.statistics().unwrap(), StatisticsSnapshot::default());
}

#[test]
fn snapshot_is_json_exportable() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write_document(dir.path(), "k", "<doc/>");

    let config = single_file_source(dir.path());
    let cache = DocumentCache::from_config(&config, &SourceRegistry::with_builtins());
    cache.get("k").unwrap();

    let json = serde_json::to_value(cache.statistics().unwrap()).unwrap();
    assert_eq!(json["miss"]["count"], 1);
    assert_eq!(json["hit"]["count"], 0);
}
