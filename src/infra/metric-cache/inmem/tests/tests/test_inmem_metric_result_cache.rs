// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use vizier_metric_cache::*;
use vizier_metric_cache_inmem::InMemoryMetricResultCache;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_written_artifact_is_visible_to_the_oracle() {
    let cache = InMemoryMetricResultCache::new();
    let key = cache_key(1);

    assert!(!cache.exists(&key).await.unwrap());

    cache.write(&key, &cached_result(2, 1)).await.unwrap();

    assert!(cache.exists(&key).await.unwrap());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_oracle_misses_unseen_versions() {
    let cache = InMemoryMetricResultCache::new();

    cache.write(&cache_key(1), &cached_result(2, 1)).await.unwrap();

    // An older cached version must not satisfy a lookup for a newer one
    assert!(!cache.exists(&cache_key(2)).await.unwrap());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_rewriting_the_same_key_is_a_no_op() {
    let cache = InMemoryMetricResultCache::new();
    let key = cache_key(1);

    cache.write(&key, &cached_result(3, 1)).await.unwrap();
    cache.write(&key, &cached_result(99, 1)).await.unwrap();

    assert_eq!(cache.get(&key).unwrap().row_count(), 3);
    assert_eq!(cache.len(), 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn test_racing_writers_for_the_same_key_both_succeed() {
    let cache = Arc::new(InMemoryMetricResultCache::new());
    let key = cache_key(1);

    let writes = [cached_result(5, 1), cached_result(7, 1)].map(|result| {
        let cache = cache.clone();
        tokio::spawn(async move { cache.write(&key, &result).await })
    });

    for write in writes {
        write.await.unwrap().unwrap();
    }

    // One of the two racing artifacts won; the key holds exactly one
    assert_eq!(cache.len(), 1);
    let row_count = cache.get(&key).unwrap().row_count();
    assert!(row_count == 5 || row_count == 7);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn cache_key(version: u64) -> CacheKey {
    CacheKey::new(
        "10000000-0000-0000-0000-000000000001".parse().unwrap(),
        "00000000-0000-0000-0000-000000000001".parse().unwrap(),
        "30000000-0000-0000-0000-000000000001".parse().unwrap(),
        MetricVersion::new(version),
    )
}

fn cached_result(row_count: usize, version: u64) -> CachedResult {
    CachedResult {
        rows: (0..row_count)
            .map(|i| serde_json::json!({ "value": i }))
            .collect(),
        row_metadata: vec![ColumnSchema {
            name: "value".to_string(),
            data_type: "int8".to_string(),
        }],
        has_more: false,
        version: MetricVersion::new(version),
    }
}
