// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use vizier_metric_cache::*;
use vizier_metric_cache_inmem::{InMemoryCredentialStore, InMemoryMetricDefinitionRepository};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_metric_repository_round_trip() {
    let repo = InMemoryMetricDefinitionRepository::new();
    let definition = sample_definition();

    repo.put_metric(definition.clone());

    let fetched = repo.get_metric_by_id(&definition.id).await.unwrap();
    assert_eq!(fetched, definition);
}

#[test_log::test(tokio::test)]
async fn test_metric_repository_reports_missing_metric() {
    let repo = InMemoryMetricDefinitionRepository::new();
    let missing: MetricID = "00000000-0000-0000-0000-0000000000ff".parse().unwrap();

    let result = repo.get_metric_by_id(&missing).await;
    assert!(matches!(result, Err(GetMetricError::NotFound(_))));
}

#[test_log::test(tokio::test)]
async fn test_metric_repository_replaces_on_new_version() {
    let repo = InMemoryMetricDefinitionRepository::new();
    let mut definition = sample_definition();

    repo.put_metric(definition.clone());

    definition.version_number = MetricVersion::new(3);
    definition.sql_content = "SELECT day, value FROM revenue_v2".to_string();
    repo.put_metric(definition.clone());

    let fetched = repo.get_metric_by_id(&definition.id).await.unwrap();
    assert_eq!(fetched.version_number, MetricVersion::new(3));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_credential_store_round_trip() {
    let store = InMemoryCredentialStore::new();
    let data_source_id: DataSourceID = "20000000-0000-0000-0000-000000000001".parse().unwrap();

    store.put_credentials(
        data_source_id,
        RawCredentials {
            source_type: Some(DataSourceType::Redshift),
            payload: "host=cluster.internal".to_string().into(),
        },
    );

    let fetched = store.get_credentials(&data_source_id).await.unwrap();
    assert_eq!(fetched.source_type, Some(DataSourceType::Redshift));
}

#[test_log::test(tokio::test)]
async fn test_credential_store_reports_missing_entry() {
    let store = InMemoryCredentialStore::new();
    let missing: DataSourceID = "20000000-0000-0000-0000-0000000000ff".parse().unwrap();

    let result = store.get_credentials(&missing).await;
    assert!(matches!(result, Err(GetCredentialsError::NotFound(_))));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn sample_definition() -> MetricDefinition {
    MetricDefinition {
        id: "00000000-0000-0000-0000-000000000001".parse().unwrap(),
        organization_id: "10000000-0000-0000-0000-000000000001".parse().unwrap(),
        name: "revenue_by_day".to_string(),
        version_number: MetricVersion::new(1),
        data_source_id: "20000000-0000-0000-0000-000000000001".parse().unwrap(),
        data_source_type: DataSourceType::Postgresql,
        sql_content: "SELECT day, value FROM revenue".to_string(),
    }
}
