// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod credential_resolver;
mod metric_cache_listener;
mod metric_cache_service;
mod metric_resolver;
mod query_execution_service;

pub use credential_resolver::*;
pub use metric_cache_listener::*;
pub use metric_cache_service::*;
pub use metric_resolver::*;
pub use query_execution_service::*;
