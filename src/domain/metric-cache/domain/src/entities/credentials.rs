// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

use crate::DataSourceType;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Credential material exactly as stored in the vault. The stored payload may
/// or may not declare which warehouse family it belongs to.
#[derive(Debug, Clone)]
pub struct RawCredentials {
    pub source_type: Option<DataSourceType>,
    pub payload: SecretString,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Warehouse family of a resolved credential, tagged with where the value
/// came from: declared on the stored payload itself, or inferred from the
/// metric's recorded data source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSourceType {
    Explicit(DataSourceType),
    Inferred(DataSourceType),
}

impl ResolvedSourceType {
    /// Merge rule: an explicit type on the stored payload wins, otherwise
    /// fall back to the type recorded on the metric definition
    pub fn merge(explicit: Option<DataSourceType>, recorded: DataSourceType) -> Self {
        match explicit {
            Some(source_type) => Self::Explicit(source_type),
            None => Self::Inferred(recorded),
        }
    }

    pub fn source_type(&self) -> DataSourceType {
        match self {
            Self::Explicit(source_type) | Self::Inferred(source_type) => *source_type,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Credentials ready for use by a warehouse adapter
#[derive(Debug, Clone)]
pub struct DataSourceCredentials {
    pub source_type: ResolvedSourceType,
    pub payload: SecretString,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
