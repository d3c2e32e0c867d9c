// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Abstracts the system time source
#[async_trait::async_trait]
pub trait SystemTimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn SystemTimeSource)]
pub struct SystemTimeSourceDefault;

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceDefault {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        // Negative durations are treated as an immediate wake-up
        if let Ok(std_duration) = duration.to_std() {
            tokio::time::sleep(std_duration).await;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
struct SystemTimeSourceStubState {
    t: DateTime<Utc>,
    sleeps: Vec<Duration>,
}

/// Deterministic time source for tests: the clock only moves when told to,
/// and sleeps return immediately while advancing the stubbed clock by the
/// requested amount. Requested sleep durations are recorded and can be
/// inspected to verify backoff schedules.
#[derive(Debug)]
pub struct SystemTimeSourceStub {
    state: Mutex<SystemTimeSourceStubState>,
}

impl SystemTimeSourceStub {
    pub fn new() -> Self {
        Self::new_set(Utc::now())
    }

    pub fn new_set(t: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new(SystemTimeSourceStubState {
                t,
                sleeps: Vec::new(),
            }),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap();
        state.t += duration;
    }

    pub fn recorded_sleeps(&self) -> Vec<Duration> {
        let state = self.state.lock().unwrap();
        state.sleeps.clone()
    }
}

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceStub {
    fn now(&self) -> DateTime<Utc> {
        let state = self.state.lock().unwrap();
        state.t
    }

    async fn sleep(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap();
        state.t += duration;
        state.sleeps.push(duration);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
