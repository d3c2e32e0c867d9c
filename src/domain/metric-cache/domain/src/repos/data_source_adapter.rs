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

use crate::{ColumnSchema, DataSourceCredentials, DataSourceID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Raw rows returned by one warehouse round-trip
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBatch {
    pub rows: Vec<serde_json::Value>,
    pub columns: Vec<ColumnSchema>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single warehouse round-trip with no timeout, retry, or cap semantics of
/// its own — those are layered on by the query execution service.
#[async_trait::async_trait]
pub trait DataSourceAdapter: Send + Sync {
    async fn run_query(
        &self,
        data_source_id: &DataSourceID,
        sql: &str,
        credentials: &DataSourceCredentials,
        fetch_limit: usize,
    ) -> Result<QueryBatch, DataSourceQueryError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Messages carried by these variants are produced by the adapters and are
/// expected to be already free of credential material.
#[derive(Error, Debug)]
pub enum DataSourceQueryError {
    #[error("Failed to connect to data source: {message}")]
    Connection { message: String },

    #[error("Query failed: {message}")]
    Execution { message: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl DataSourceQueryError {
    /// Connection-level failures are worth retrying, execution failures are
    /// deterministic and are not
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
