// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::MetricVersion;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shape of one result column as reported by the warehouse adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A materialized query result as persisted by the cache writer. Once written
/// under a cache key it is never mutated by this pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResult {
    pub rows: Vec<serde_json::Value>,
    pub row_metadata: Vec<ColumnSchema>,
    /// True when the row cap truncated the result set
    pub has_more: bool,
    pub version: MetricVersion,
}

impl CachedResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
