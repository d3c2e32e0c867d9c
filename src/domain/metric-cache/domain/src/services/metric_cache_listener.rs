// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{BatchSummary, MetricCacheError, MetricID, MetricVersion};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fire-and-forget progress sink. Implementations must be cheap and must not
/// fail — the pipeline never awaits on or reacts to a listener.
pub trait MetricCacheListener: Send + Sync {
    fn on_metric_started(&self, _metric_id: &MetricID) {}

    fn on_cache_hit(&self, _metric_id: &MetricID, _version: MetricVersion) {}

    fn on_metric_cached(&self, _metric_id: &MetricID, _version: MetricVersion, _row_count: usize) {}

    fn on_metric_failed(&self, _metric_id: &MetricID, _error: &MetricCacheError) {}

    fn on_batch_finished(&self, _summary: &BatchSummary) {}
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct NullMetricCacheListener;

impl MetricCacheListener for NullMetricCacheListener {}
