// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod mock_credential_resolver;
mod mock_metric_resolver;
mod mock_metric_result_cache;
mod mock_query_execution;

pub use mock_credential_resolver::*;
pub use mock_metric_resolver::*;
pub use mock_metric_result_cache::*;
pub use mock_query_execution::*;
