// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dill::*;
use vizier_metric_cache::{
    CredentialStore,
    CredentialsNotFoundError,
    DataSourceID,
    GetCredentialsError,
    RawCredentials,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    credentials: HashMap<DataSourceID, RawCredentials>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryCredentialStore {
    state: Arc<Mutex<State>>,
}

#[component(pub)]
#[interface(dyn CredentialStore)]
#[scope(Singleton)]
impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

impl InMemoryCredentialStore {
    pub fn put_credentials(&self, data_source_id: DataSourceID, credentials: RawCredentials) {
        let mut guard = self.state.lock().unwrap();
        guard.credentials.insert(data_source_id, credentials);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_credentials(
        &self,
        data_source_id: &DataSourceID,
    ) -> Result<RawCredentials, GetCredentialsError> {
        let guard = self.state.lock().unwrap();
        match guard.credentials.get(data_source_id) {
            Some(credentials) => Ok(credentials.clone()),
            None => Err(GetCredentialsError::NotFound(CredentialsNotFoundError {
                data_source_id: *data_source_id,
            })),
        }
    }
}
