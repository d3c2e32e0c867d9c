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
use dill::*;
use internal_error::ResultIntoInternal;
use time_source::SystemTimeSource;
use vizier_metric_cache::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component]
#[interface(dyn QueryExecutionService)]
pub struct QueryExecutionServiceImpl {
    data_source_adapter: Arc<dyn DataSourceAdapter>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl QueryExecutionServiceImpl {
    fn apply_row_cap(batch: QueryBatch, max_rows: usize) -> QueryResult {
        let mut rows = batch.rows;
        let has_more = rows.len() > max_rows;
        rows.truncate(max_rows);

        QueryResult {
            rows,
            columns: batch.columns,
            has_more,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl QueryExecutionService for QueryExecutionServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(data_source_id = %request.data_source_id))]
    async fn execute(
        &self,
        request: QueryExecutionRequest,
        options: QueryExecutionOptions,
    ) -> Result<QueryResult, QueryExecutionError> {
        // One row beyond the cap tells us whether truncation occurred
        let fetch_limit = options.max_rows + 1;
        let attempt_timeout = options.timeout.to_std().int_err()?;

        let mut attempt = 1;
        loop {
            let run = self.data_source_adapter.run_query(
                &request.data_source_id,
                &request.sql,
                &request.credentials,
                fetch_limit,
            );

            let attempt_result = match tokio::time::timeout(attempt_timeout, run).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(QueryExecutionError::Timeout {
                        timeout_ms: options.timeout.num_milliseconds(),
                    });
                }
            };

            match attempt_result {
                Ok(batch) => return Ok(Self::apply_row_cap(batch, options.max_rows)),
                Err(e) if e.is_transient() && attempt < options.retry_policy.max_attempts() => {
                    attempt += 1;
                    let backoff = options
                        .retry_policy
                        .backoff_before_attempt(attempt)
                        .unwrap_or_else(Duration::zero);

                    tracing::debug!(
                        attempt,
                        backoff_ms = backoff.num_milliseconds(),
                        error = %e,
                        "Transient query failure, backing off before retry"
                    );

                    self.time_source.sleep(backoff).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
