// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::{
    CacheKey,
    CacheWriteError,
    CachedResult,
    MetricCacheOracle,
    MetricCacheWriter,
    MetricID,
    MetricVersion,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub MetricCacheOracle {}

    #[async_trait::async_trait]
    impl MetricCacheOracle for MetricCacheOracle {
        async fn exists(&self, key: &CacheKey) -> Result<bool, InternalError>;
    }
}

impl MockMetricCacheOracle {
    /// Reports a hit for one metric at one exact version, a miss for
    /// everything else
    pub fn make_expect_exists_only_at(
        mut self,
        metric_id: MetricID,
        version: MetricVersion,
    ) -> Self {
        self.expect_exists()
            .returning(move |key| Ok(key.metric_id == metric_id && key.version == version));
        self
    }

    pub fn make_expect_all_misses(mut self) -> Self {
        self.expect_exists().returning(|_| Ok(false));
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub MetricCacheWriter {}

    #[async_trait::async_trait]
    impl MetricCacheWriter for MetricCacheWriter {
        async fn write(
            &self,
            key: &CacheKey,
            result: &CachedResult,
        ) -> Result<(), CacheWriteError>;
    }
}

impl MockMetricCacheWriter {
    pub fn make_expect_write(mut self) -> Self {
        self.expect_write().returning(|_, _| Ok(()));
        self
    }

    pub fn make_expect_write_failure(mut self, message: &str) -> Self {
        let message = message.to_string();
        self.expect_write().returning(move |_, _| {
            Err(CacheWriteError::Storage {
                message: message.clone(),
            })
        });
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
