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

use crate::{CacheKey, CachedResult};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Answers whether a cached artifact already exists for a key. Reports
/// existence only, not content — a hit short-circuits the pipeline without
/// learning the artifact's row count.
#[async_trait::async_trait]
pub trait MetricCacheOracle: Send + Sync {
    async fn exists(&self, key: &CacheKey) -> Result<bool, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Persists query results under a cache key. Implementations must tolerate
/// racing writers for the same key; the pipeline assumes no exclusivity.
#[async_trait::async_trait]
pub trait MetricCacheWriter: Send + Sync {
    async fn write(&self, key: &CacheKey, result: &CachedResult) -> Result<(), CacheWriteError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CacheWriteError {
    #[error("Cache write failed: {message}")]
    Storage { message: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}
