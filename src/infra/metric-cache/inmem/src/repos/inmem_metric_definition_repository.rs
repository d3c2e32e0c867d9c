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
use vizier_metric_cache::{
    GetMetricError,
    MetricDefinition,
    MetricDefinitionRepository,
    MetricID,
    MetricNotFoundError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    metrics: HashMap<MetricID, MetricDefinition>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryMetricDefinitionRepository {
    state: Arc<Mutex<State>>,
}

#[component(pub)]
#[interface(dyn MetricDefinitionRepository)]
#[scope(Singleton)]
impl InMemoryMetricDefinitionRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

impl InMemoryMetricDefinitionRepository {
    /// Registers a definition, replacing any previous version of the metric
    pub fn put_metric(&self, definition: MetricDefinition) {
        let mut guard = self.state.lock().unwrap();
        guard.metrics.insert(definition.id, definition);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MetricDefinitionRepository for InMemoryMetricDefinitionRepository {
    async fn get_metric_by_id(
        &self,
        metric_id: &MetricID,
    ) -> Result<MetricDefinition, GetMetricError> {
        let guard = self.state.lock().unwrap();
        match guard.metrics.get(metric_id) {
            Some(definition) => Ok(definition.clone()),
            None => Err(GetMetricError::NotFound(MetricNotFoundError {
                metric_id: *metric_id,
            })),
        }
    }
}
