// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Duration;
use internal_error::InternalError;
use thiserror::Error;

use crate::{ColumnSchema, DataSourceCredentials, DataSourceID, DataSourceQueryError, RetryPolicy};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs a metric's SQL against its warehouse with a hard row cap, a per-call
/// timeout, and internal retry of transient failures. Callers only observe
/// the final success or failure.
#[async_trait::async_trait]
pub trait QueryExecutionService: Send + Sync {
    async fn execute(
        &self,
        request: QueryExecutionRequest,
        options: QueryExecutionOptions,
    ) -> Result<QueryResult, QueryExecutionError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct QueryExecutionRequest {
    pub data_source_id: DataSourceID,
    pub sql: String,
    pub credentials: DataSourceCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExecutionOptions {
    /// Hard cap on the number of rows a cached artifact may hold
    pub max_rows: usize,
    /// Time budget of a single warehouse attempt
    pub timeout: Duration,
    /// Retry schedule applied to transient failures
    pub retry_policy: RetryPolicy,
}

impl Default for QueryExecutionOptions {
    fn default() -> Self {
        Self {
            max_rows: 50_000,
            timeout: Duration::seconds(60),
            retry_policy: RetryPolicy::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<serde_json::Value>,
    pub columns: Vec<ColumnSchema>,
    /// True when the row cap truncated the result set
    pub has_more: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum QueryExecutionError {
    #[error("Query timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: i64 },

    #[error(transparent)]
    DataSource(#[from] DataSourceQueryError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}
