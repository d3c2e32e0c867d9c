// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    ColumnSchema,
    DataSourceAdapter,
    DataSourceCredentials,
    DataSourceID,
    DataSourceQueryError,
    QueryBatch,
    QueryExecutionError,
    QueryExecutionOptions,
    QueryExecutionRequest,
    QueryExecutionService,
    QueryResult,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub QueryExecutionService {}

    #[async_trait::async_trait]
    impl QueryExecutionService for QueryExecutionService {
        async fn execute(
            &self,
            request: QueryExecutionRequest,
            options: QueryExecutionOptions,
        ) -> Result<QueryResult, QueryExecutionError>;
    }
}

impl MockQueryExecutionService {
    pub fn make_expect_rows(mut self, row_count: usize) -> Self {
        self.expect_execute()
            .returning(move |_, _| Ok(sample_query_result(row_count)));
        self
    }

    pub fn make_expect_never_called(mut self) -> Self {
        self.expect_execute().never();
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub DataSourceAdapter {}

    #[async_trait::async_trait]
    impl DataSourceAdapter for DataSourceAdapter {
        async fn run_query(
            &self,
            data_source_id: &DataSourceID,
            sql: &str,
            credentials: &DataSourceCredentials,
            fetch_limit: usize,
        ) -> Result<QueryBatch, DataSourceQueryError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn sample_query_result(row_count: usize) -> QueryResult {
    QueryResult {
        rows: sample_rows(row_count),
        columns: sample_columns(),
        has_more: false,
    }
}

pub fn sample_rows(row_count: usize) -> Vec<serde_json::Value> {
    (0..row_count)
        .map(|i| serde_json::json!({ "day": i, "value": i * 10 }))
        .collect()
}

pub fn sample_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema {
            name: "day".to_string(),
            data_type: "int8".to_string(),
        },
        ColumnSchema {
            name: "value".to_string(),
            data_type: "int8".to_string(),
        },
    ]
}
