// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::{
    GetMetricError,
    MetricDefinition,
    MetricDefinitionRepository,
    MetricID,
    MetricResolver,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub MetricResolver {}

    #[async_trait::async_trait]
    impl MetricResolver for MetricResolver {
        async fn resolve(
            &self,
            metric_id: &MetricID,
        ) -> Result<Option<MetricDefinition>, InternalError>;
    }
}

impl MockMetricResolver {
    pub fn make_expect_resolve(
        mut self,
        metric_id: MetricID,
        maybe_definition: Option<MetricDefinition>,
    ) -> Self {
        self.expect_resolve()
            .withf(move |id| *id == metric_id)
            .returning(move |_| Ok(maybe_definition.clone()));
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub MetricDefinitionRepository {}

    #[async_trait::async_trait]
    impl MetricDefinitionRepository for MetricDefinitionRepository {
        async fn get_metric_by_id(
            &self,
            metric_id: &MetricID,
        ) -> Result<MetricDefinition, GetMetricError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
