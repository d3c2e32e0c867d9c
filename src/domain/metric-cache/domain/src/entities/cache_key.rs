// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use crate::{MetricID, MetricVersion, OrganizationID, ReportID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identifies a single immutable cached artifact. The version component makes
/// invalidation implicit: editing a metric bumps its version, so the next run
/// derives a key the cache store has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub organization_id: OrganizationID,
    pub metric_id: MetricID,
    pub report_id: ReportID,
    pub version: MetricVersion,
}

impl CacheKey {
    pub fn new(
        organization_id: OrganizationID,
        metric_id: MetricID,
        report_id: ReportID,
        version: MetricVersion,
    ) -> Self {
        Self {
            organization_id,
            metric_id,
            report_id,
            version,
        }
    }

    /// Object path of the artifact within the organization's static report
    /// assets area
    pub fn storage_path(&self) -> String {
        format!(
            "static-report-assets/{}/{}-{}-v{}.json",
            self.organization_id, self.metric_id, self.report_id, self.version,
        )
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_path())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
