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
use time_source::SystemTimeSource;
use vizier_metric_cache::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component]
#[interface(dyn MetricCacheService)]
pub struct MetricCacheServiceImpl {
    metric_resolver: Arc<dyn MetricResolver>,
    credential_resolver: Arc<dyn CredentialResolver>,
    cache_oracle: Arc<dyn MetricCacheOracle>,
    cache_writer: Arc<dyn MetricCacheWriter>,
    query_execution_service: Arc<dyn QueryExecutionService>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Everything one per-metric task needs, cloned into the spawned future
#[derive(Clone)]
struct MetricTaskContext {
    report_id: ReportID,
    organization_id: OrganizationID,
    metric_resolver: Arc<dyn MetricResolver>,
    credential_resolver: Arc<dyn CredentialResolver>,
    cache_oracle: Arc<dyn MetricCacheOracle>,
    cache_writer: Arc<dyn MetricCacheWriter>,
    query_execution_service: Arc<dyn QueryExecutionService>,
    query_options: QueryExecutionOptions,
    maybe_listener: Option<Arc<dyn MetricCacheListener>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl MetricCacheServiceImpl {
    fn make_task_context(
        &self,
        request: &MetricCacheRequest,
        options: &MetricCacheOptions,
        maybe_listener: Option<Arc<dyn MetricCacheListener>>,
    ) -> MetricTaskContext {
        MetricTaskContext {
            report_id: request.report_id,
            organization_id: request.organization_id,
            metric_resolver: self.metric_resolver.clone(),
            credential_resolver: self.credential_resolver.clone(),
            cache_oracle: self.cache_oracle.clone(),
            cache_writer: self.cache_writer.clone(),
            query_execution_service: self.query_execution_service.clone(),
            query_options: options.query.clone(),
            maybe_listener,
        }
    }

    /// Runs one metric through the full resolve / cache-check / validate /
    /// execute / write sequence. Infallible by construction: any stage error
    /// becomes a terminal per-metric outcome and never crosses the task
    /// boundary.
    async fn cache_single_metric(ctx: MetricTaskContext, metric_id: MetricID) -> MetricCacheResponse {
        if let Some(listener) = &ctx.maybe_listener {
            listener.on_metric_started(&metric_id);
        }

        let result = Self::try_cache_metric(&ctx, metric_id).await;

        match &result {
            Ok(MetricCacheResult::AlreadyCached { version }) => {
                tracing::debug!(%metric_id, %version, "Metric already cached");
                if let Some(listener) = &ctx.maybe_listener {
                    listener.on_cache_hit(&metric_id, *version);
                }
            }
            Ok(MetricCacheResult::Cached { version, row_count }) => {
                tracing::info!(%metric_id, %version, row_count, "Cached metric result");
                if let Some(listener) = &ctx.maybe_listener {
                    listener.on_metric_cached(&metric_id, *version, *row_count);
                }
            }
            Err(error) => {
                tracing::warn!(%metric_id, error = %error, error_dbg = ?error, "Caching metric failed");
                if let Some(listener) = &ctx.maybe_listener {
                    listener.on_metric_failed(&metric_id, error);
                }
            }
        }

        MetricCacheResponse { metric_id, result }
    }

    async fn try_cache_metric(
        ctx: &MetricTaskContext,
        metric_id: MetricID,
    ) -> Result<MetricCacheResult, MetricCacheError> {
        // Definitions are read fresh so the cache key binds to the current
        // version
        let Some(definition) = ctx.metric_resolver.resolve(&metric_id).await? else {
            return Err(MetricNotFoundError { metric_id }.into());
        };

        let cache_key = CacheKey::new(
            ctx.organization_id,
            metric_id,
            ctx.report_id,
            definition.version_number,
        );

        // The key embeds the requester's organization, so a hit can only be
        // an artifact this organization wrote earlier
        if ctx.cache_oracle.exists(&cache_key).await? {
            return Ok(MetricCacheResult::AlreadyCached {
                version: definition.version_number,
            });
        }

        // Ownership check must pass before any query work happens
        if definition.organization_id != ctx.organization_id {
            return Err(OrganizationMismatchError {
                metric_id,
                metric_organization_id: definition.organization_id,
                request_organization_id: ctx.organization_id,
            }
            .into());
        }

        let credentials = ctx
            .credential_resolver
            .resolve(&definition.data_source_id, definition.data_source_type)
            .await?;

        let query_result = ctx
            .query_execution_service
            .execute(
                QueryExecutionRequest {
                    data_source_id: definition.data_source_id,
                    sql: definition.sql_content.clone(),
                    credentials,
                },
                ctx.query_options.clone(),
            )
            .await?;

        let row_count = query_result.rows.len();
        let cached_result = CachedResult {
            rows: query_result.rows,
            row_metadata: query_result.columns,
            has_more: query_result.has_more,
            version: definition.version_number,
        };

        ctx.cache_writer.write(&cache_key, &cached_result).await?;

        Ok(MetricCacheResult::Cached {
            version: definition.version_number,
            row_count,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MetricCacheService for MetricCacheServiceImpl {
    #[tracing::instrument(
        level = "info",
        name = "MetricCacheService::cache_report_metrics",
        skip_all,
        fields(report_id = %request.report_id, num_metrics = request.metric_ids.len())
    )]
    async fn cache_report_metrics(
        &self,
        request: MetricCacheRequest,
        options: MetricCacheOptions,
        maybe_listener: Option<Arc<dyn MetricCacheListener>>,
    ) -> Result<MetricCacheBatchResponse, MetricCacheRequestError> {
        request.validate()?;

        let started_at = self.time_source.now();
        tracing::info!(chunk_size = options.chunk_size, "Caching report metrics");

        let ctx = self.make_task_context(&request, &options, maybe_listener.clone());
        let chunk_size = options.chunk_size.max(1);

        // Outcomes are written into pre-allocated slots at the metric's input
        // index, keeping the response order stable no matter which task
        // finishes first
        let total_metrics = request.metric_ids.len();
        let mut response_slots: Vec<Option<MetricCacheResponse>> =
            (0..total_metrics).map(|_| None).collect();

        for (chunk_index, chunk) in request.metric_ids.chunks(chunk_size).enumerate() {
            let chunk_base = chunk_index * chunk_size;
            tracing::debug!(chunk_index, chunk_len = chunk.len(), "Running cache chunk");

            let mut tasks = tokio::task::JoinSet::new();
            for (offset, metric_id) in chunk.iter().enumerate() {
                let index = chunk_base + offset;
                let metric_id = *metric_id;
                let ctx = ctx.clone();

                tasks.spawn(async move {
                    (index, Self::cache_single_metric(ctx, metric_id).await)
                });
            }

            // The next chunk only starts once every member of this one has
            // settled, bounding peak concurrent warehouse load
            let settled = tasks.join_all().await;
            for (index, response) in settled {
                response_slots[index] = Some(response);
            }
        }

        let responses: Vec<_> = response_slots
            .into_iter()
            .map(|slot| slot.expect("slot must be written by its chunk"))
            .collect();

        let summary = BatchSummary::compute(&responses, self.time_source.now() - started_at);
        if let Some(listener) = &maybe_listener {
            listener.on_batch_finished(&summary);
        }

        tracing::info!(
            total = summary.total_metrics,
            succeeded = summary.success_count,
            failed = summary.failure_count,
            execution_time_ms = summary.execution_time_ms,
            "Finished caching report metrics"
        );

        Ok(MetricCacheBatchResponse { summary, responses })
    }
}
