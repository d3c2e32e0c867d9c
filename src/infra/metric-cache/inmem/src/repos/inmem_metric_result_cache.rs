// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dill::*;
use internal_error::InternalError;
use vizier_metric_cache::{
    CacheKey,
    CacheWriteError,
    CachedResult,
    MetricCacheOracle,
    MetricCacheWriter,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    artifacts: HashMap<CacheKey, CachedResult>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryMetricResultCache {
    state: Arc<Mutex<State>>,
}

#[component(pub)]
#[interface(dyn MetricCacheOracle)]
#[interface(dyn MetricCacheWriter)]
#[scope(Singleton)]
impl InMemoryMetricResultCache {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

impl InMemoryMetricResultCache {
    pub fn get(&self, key: &CacheKey) -> Option<CachedResult> {
        let guard = self.state.lock().unwrap();
        guard.artifacts.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        let guard = self.state.lock().unwrap();
        guard.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MetricCacheOracle for InMemoryMetricResultCache {
    async fn exists(&self, key: &CacheKey) -> Result<bool, InternalError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.artifacts.contains_key(key))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MetricCacheWriter for InMemoryMetricResultCache {
    async fn write(&self, key: &CacheKey, result: &CachedResult) -> Result<(), CacheWriteError> {
        let mut guard = self.state.lock().unwrap();

        // Artifacts are immutable per key: a racing writer for the same
        // version resolves as a no-op rather than an overwrite
        guard
            .artifacts
            .entry(*key)
            .or_insert_with(|| result.clone());

        Ok(())
    }
}
