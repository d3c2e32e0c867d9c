// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{
    MetricCacheBatchResponse,
    MetricCacheError,
    MetricCacheRequest,
    MetricCacheResponse,
    MetricID,
    MetricVersion,
    OrganizationID,
    ReportID,
    UserID,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Payload the job runner hands to a pipeline invocation. The runner provides
/// at-least-once semantics with outer retries, which is safe because
/// re-running skips metrics already cached at the resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCacheTaskInput {
    pub report_id: ReportID,
    pub metric_ids: Vec<MetricID>,
    pub user_id: UserID,
    pub organization_id: OrganizationID,
}

impl From<MetricCacheTaskInput> for MetricCacheRequest {
    fn from(input: MetricCacheTaskInput) -> Self {
        Self {
            report_id: input.report_id,
            metric_ids: input.metric_ids,
            user_id: input.user_id,
            organization_id: input.organization_id,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One per requested metric in the job output, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedMetricRecord {
    pub metric_id: MetricID,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<MetricVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&MetricCacheResponse> for CachedMetricRecord {
    fn from(response: &MetricCacheResponse) -> Self {
        match &response.result {
            Ok(result) => Self {
                metric_id: response.metric_id,
                success: true,
                row_count: result.row_count(),
                version: Some(result.version()),
                error: None,
            },
            Err(error) => Self {
                metric_id: response.metric_id,
                success: false,
                row_count: None,
                version: None,
                error: Some(render_error(error)),
            },
        }
    }
}

fn render_error(error: &MetricCacheError) -> String {
    match error {
        MetricCacheError::Internal(e) => e.reason(),
        _ => error.to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCacheTaskResult {
    pub success: bool,
    pub report_id: ReportID,
    pub cached: Vec<CachedMetricRecord>,
    pub total_metrics: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub execution_time_ms: i64,
}

impl MetricCacheTaskResult {
    pub fn new(report_id: ReportID, batch: &MetricCacheBatchResponse) -> Self {
        Self {
            success: batch.summary.success,
            report_id,
            cached: batch.responses.iter().map(CachedMetricRecord::from).collect(),
            total_metrics: batch.summary.total_metrics,
            success_count: batch.summary.success_count,
            failure_count: batch.summary.failure_count,
            execution_time_ms: batch.summary.execution_time_ms,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
