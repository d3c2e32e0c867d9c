// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod cache_key;
mod cached_result;
mod credentials;
mod ids;
mod metric_definition;
mod retry_policy;

pub use cache_key::*;
pub use cached_result::*;
pub use credentials::*;
pub use ids::*;
pub use metric_definition::*;
pub use retry_policy::*;
