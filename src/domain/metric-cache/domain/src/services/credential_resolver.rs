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

use crate::{DataSourceCredentials, DataSourceID, DataSourceType};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Obtains warehouse credentials for a data source, normalizing the source
/// type: a type declared on the stored payload wins, otherwise the metric's
/// recorded type is used.
#[async_trait::async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve(
        &self,
        data_source_id: &DataSourceID,
        fallback_source_type: DataSourceType,
    ) -> Result<DataSourceCredentials, CredentialResolveError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Deliberately generic: the displayed message never includes details of the
/// credential store failure. The chained source is for tracing only.
#[derive(Error, Debug)]
#[error("Failed to resolve data source credentials")]
pub struct CredentialResolveError {
    #[source]
    pub source: Option<InternalError>,
}
