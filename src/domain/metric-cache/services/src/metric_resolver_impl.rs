// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use internal_error::InternalError;
use vizier_metric_cache::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component]
#[interface(dyn MetricResolver)]
pub struct MetricResolverImpl {
    metric_definition_repo: Arc<dyn MetricDefinitionRepository>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MetricResolver for MetricResolverImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%metric_id))]
    async fn resolve(
        &self,
        metric_id: &MetricID,
    ) -> Result<Option<MetricDefinition>, InternalError> {
        match self.metric_definition_repo.get_metric_by_id(metric_id).await {
            Ok(definition) => Ok(Some(definition)),
            Err(GetMetricError::NotFound(_)) => Ok(None),
            Err(GetMetricError::Internal(e)) => Err(e),
        }
    }
}
