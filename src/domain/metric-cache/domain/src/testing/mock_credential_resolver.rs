// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    CredentialResolveError,
    CredentialResolver,
    CredentialStore,
    DataSourceCredentials,
    DataSourceID,
    DataSourceType,
    GetCredentialsError,
    RawCredentials,
    ResolvedSourceType,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub CredentialResolver {}

    #[async_trait::async_trait]
    impl CredentialResolver for CredentialResolver {
        async fn resolve(
            &self,
            data_source_id: &DataSourceID,
            fallback_source_type: DataSourceType,
        ) -> Result<DataSourceCredentials, CredentialResolveError>;
    }
}

impl MockCredentialResolver {
    pub fn make_expect_resolve(mut self) -> Self {
        self.expect_resolve().returning(|_, fallback| {
            Ok(sample_credentials(ResolvedSourceType::Inferred(fallback)))
        });
        self
    }

    pub fn make_expect_resolve_failure(mut self, data_source_id: DataSourceID) -> Self {
        self.expect_resolve()
            .withf(move |id, _| *id == data_source_id)
            .returning(|_, _| Err(CredentialResolveError { source: None }));
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub CredentialStore {}

    #[async_trait::async_trait]
    impl CredentialStore for CredentialStore {
        async fn get_credentials(
            &self,
            data_source_id: &DataSourceID,
        ) -> Result<RawCredentials, GetCredentialsError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn sample_credentials(source_type: ResolvedSourceType) -> DataSourceCredentials {
    DataSourceCredentials {
        source_type,
        payload: "host=warehouse.test user=svc".to_string().into(),
    }
}
