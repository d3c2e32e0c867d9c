// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DataSourceID, MetricID, OrganizationID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One immutable content state of a metric. Version numbers grow
/// monotonically with every edit of the definition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MetricVersion(u64);

impl MetricVersion {
    pub fn new(version_number: u64) -> Self {
        Self(version_number)
    }

    pub fn version_number(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MetricVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Warehouse families the platform ships query adapters for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataSourceType {
    Postgresql,
    Mysql,
    Snowflake,
    Bigquery,
    Redshift,
    Sqlserver,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A metric definition as read from the metric store. Fetched fresh on every
/// pipeline run and never cached by this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub id: MetricID,
    pub organization_id: OrganizationID,
    pub name: String,
    pub version_number: MetricVersion,
    pub data_source_id: DataSourceID,
    pub data_source_type: DataSourceType,
    pub sql_content: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
