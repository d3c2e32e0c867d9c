// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{MetricDefinition, MetricID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read access to the metric store. Definitions are read fresh on every
/// pipeline run so that the cache key always binds to the current version.
#[async_trait::async_trait]
pub trait MetricDefinitionRepository: Send + Sync {
    async fn get_metric_by_id(
        &self,
        metric_id: &MetricID,
    ) -> Result<MetricDefinition, GetMetricError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Metric not found")]
pub struct MetricNotFoundError {
    pub metric_id: MetricID,
}

#[derive(Error, Debug)]
pub enum GetMetricError {
    #[error(transparent)]
    NotFound(#[from] MetricNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}
