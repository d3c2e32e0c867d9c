// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::Duration;
use internal_error::InternalError;
use thiserror::Error;

use crate::{
    CacheWriteError,
    CredentialResolveError,
    MetricCacheListener,
    MetricID,
    MetricNotFoundError,
    MetricVersion,
    OrganizationID,
    QueryExecutionError,
    QueryExecutionOptions,
    ReportID,
    UserID,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Service
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Pre-materializes query results for the set of metrics attached to a
/// report. Metrics are processed in bounded-concurrency chunks with full
/// failure isolation: one bad metric never aborts its siblings or the batch.
#[async_trait::async_trait]
pub trait MetricCacheService: Send + Sync {
    async fn cache_report_metrics(
        &self,
        request: MetricCacheRequest,
        options: MetricCacheOptions,
        maybe_listener: Option<Arc<dyn MetricCacheListener>>,
    ) -> Result<MetricCacheBatchResponse, MetricCacheRequestError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCacheRequest {
    pub report_id: ReportID,
    pub metric_ids: Vec<MetricID>,
    pub user_id: UserID,
    pub organization_id: OrganizationID,
}

impl MetricCacheRequest {
    pub fn validate(&self) -> Result<(), MetricCacheRequestError> {
        if self.metric_ids.is_empty() {
            return Err(MetricCacheRequestError::EmptyMetricIds);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MetricCacheOptions {
    /// Number of metrics processed concurrently; chunks run strictly one
    /// after another, bounding peak warehouse load
    pub chunk_size: usize,
    /// Query-execution settings applied to every cache miss
    pub query: QueryExecutionOptions,
}

impl Default for MetricCacheOptions {
    fn default() -> Self {
        Self {
            chunk_size: 3,
            query: QueryExecutionOptions::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct MetricCacheBatchResponse {
    pub summary: BatchSummary,
    /// One response per requested metric, in input order regardless of
    /// completion order
    pub responses: Vec<MetricCacheResponse>,
}

#[derive(Debug)]
pub struct MetricCacheResponse {
    pub metric_id: MetricID,
    pub result: Result<MetricCacheResult, MetricCacheError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricCacheResult {
    /// An artifact for the resolved version already existed; its row count is
    /// unknown since the existence check returns only a boolean
    AlreadyCached { version: MetricVersion },
    Cached {
        version: MetricVersion,
        row_count: usize,
    },
}

impl MetricCacheResult {
    pub fn version(&self) -> MetricVersion {
        match self {
            Self::AlreadyCached { version } | Self::Cached { version, .. } => *version,
        }
    }

    pub fn row_count(&self) -> Option<usize> {
        match self {
            Self::AlreadyCached { .. } => None,
            Self::Cached { row_count, .. } => Some(*row_count),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_metrics: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub execution_time_ms: i64,
    pub success: bool,
}

impl BatchSummary {
    /// Reduces per-metric outcomes; elapsed time is measured orchestrator
    /// entry to final outcome collection
    pub fn compute(responses: &[MetricCacheResponse], execution_time: Duration) -> Self {
        let total_metrics = responses.len();
        let success_count = responses.iter().filter(|r| r.result.is_ok()).count();
        let failure_count = total_metrics - success_count;

        Self {
            total_metrics,
            success_count,
            failure_count,
            execution_time_ms: execution_time.num_milliseconds(),
            success: failure_count == 0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The only error class that aborts a whole invocation: malformed top-level
/// input, detected before any per-metric processing begins
#[derive(Error, Debug)]
pub enum MetricCacheRequestError {
    #[error("Request contains no metric ids")]
    EmptyMetricIds,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Terminal per-metric failures. Display strings are stable: they are what
/// callers of the job interface see.
#[derive(Error, Debug)]
pub enum MetricCacheError {
    #[error("Metric not found")]
    NotFound(#[from] MetricNotFoundError),

    #[error("Organization mismatch")]
    OrganizationMismatch(#[from] OrganizationMismatchError),

    #[error(transparent)]
    Credential(#[from] CredentialResolveError),

    #[error(transparent)]
    QueryExecution(#[from] QueryExecutionError),

    #[error(transparent)]
    CacheWrite(#[from] CacheWriteError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Security-relevant rejection: the metric belongs to a different
/// organization than the caller's. Never retried; details stay out of the
/// displayed message.
#[derive(Error, Debug)]
#[error("Organization mismatch")]
pub struct OrganizationMismatchError {
    pub metric_id: MetricID,
    pub metric_organization_id: OrganizationID,
    pub request_organization_id: OrganizationID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
