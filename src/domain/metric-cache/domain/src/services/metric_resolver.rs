// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::{MetricDefinition, MetricID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads a metric's current definition, version, ownership, and data source
/// binding. Pure read, no side effects. A missing metric is a normal outcome,
/// not an error.
#[async_trait::async_trait]
pub trait MetricResolver: Send + Sync {
    async fn resolve(
        &self,
        metric_id: &MetricID,
    ) -> Result<Option<MetricDefinition>, InternalError>;
}
