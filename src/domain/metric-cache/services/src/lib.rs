// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod credential_resolver_impl;
mod metric_cache_service_impl;
mod metric_resolver_impl;
mod query_execution_service_impl;

pub use credential_resolver_impl::*;
pub use metric_cache_service_impl::*;
pub use metric_resolver_impl::*;
pub use query_execution_service_impl::*;
