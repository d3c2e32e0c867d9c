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

use crate::{DataSourceID, RawCredentials};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Access to the credential vault. Errors from this seam may carry details of
/// the underlying store and must never reach callers unsanitized — the
/// credential resolver maps them to a generic error.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get_credentials(
        &self,
        data_source_id: &DataSourceID,
    ) -> Result<RawCredentials, GetCredentialsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("No credentials registered for data source {data_source_id}")]
pub struct CredentialsNotFoundError {
    pub data_source_id: DataSourceID,
}

#[derive(Error, Debug)]
pub enum GetCredentialsError {
    #[error(transparent)]
    NotFound(#[from] CredentialsNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}
