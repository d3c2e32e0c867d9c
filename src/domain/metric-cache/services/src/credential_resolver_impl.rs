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
use internal_error::ErrorIntoInternal;
use vizier_metric_cache::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component]
#[interface(dyn CredentialResolver)]
pub struct CredentialResolverImpl {
    credential_store: Arc<dyn CredentialStore>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CredentialResolver for CredentialResolverImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%data_source_id))]
    async fn resolve(
        &self,
        data_source_id: &DataSourceID,
        fallback_source_type: DataSourceType,
    ) -> Result<DataSourceCredentials, CredentialResolveError> {
        let raw = match self.credential_store.get_credentials(data_source_id).await {
            Ok(raw) => raw,
            Err(e) => {
                // Store errors may mention connection details, so only the
                // generic error crosses this boundary
                tracing::error!(%data_source_id, error = ?e, "Credential lookup failed");

                let source = match e {
                    GetCredentialsError::NotFound(e) => e.int_err(),
                    GetCredentialsError::Internal(e) => e,
                };
                return Err(CredentialResolveError {
                    source: Some(source),
                });
            }
        };

        Ok(DataSourceCredentials {
            source_type: ResolvedSourceType::merge(raw.source_type, fallback_source_type),
            payload: raw.payload,
        })
    }
}
