// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Bounded retry schedule for transient failures. `max_attempts` counts the
/// initial attempt, so `max_attempts == 1` means no retries. When the backoff
/// schedule is shorter than the retry count, the last entry repeats.
#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    max_attempts: u32,
    #[serde_as(as = "Vec<serde_with::DurationMilliSeconds<i64>>")]
    backoff_schedule: Vec<Duration>,
}

impl RetryPolicy {
    pub fn try_new(
        max_attempts: u32,
        backoff_schedule: Vec<Duration>,
    ) -> Result<Self, RetryPolicyValidationError> {
        if max_attempts == 0 {
            return Err(RetryPolicyValidationError::ZeroAttempts);
        }
        if backoff_schedule.iter().any(|d| *d < Duration::zero()) {
            return Err(RetryPolicyValidationError::NegativeBackoff);
        }

        Ok(Self {
            max_attempts,
            backoff_schedule,
        })
    }

    pub fn no_retries() -> Self {
        Self {
            max_attempts: 1,
            backoff_schedule: Vec::new(),
        }
    }

    #[inline]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Backoff to wait before the given 1-based attempt, or `None` when the
    /// attempt number exceeds the policy
    pub fn backoff_before_attempt(&self, attempt: u32) -> Option<Duration> {
        if attempt < 2 || attempt > self.max_attempts {
            return None;
        }

        let retry_index = (attempt - 2) as usize;
        match self.backoff_schedule.get(retry_index) {
            Some(backoff) => Some(*backoff),
            None => self.backoff_schedule.last().copied().or(Some(Duration::zero())),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_schedule: vec![Duration::seconds(1), Duration::seconds(3)],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum RetryPolicyValidationError {
    #[error("Retry policy must allow at least one attempt")]
    ZeroAttempts,

    #[error("Backoff durations must not be negative")]
    NegativeBackoff,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
