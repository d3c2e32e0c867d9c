// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod credential_store;
mod data_source_adapter;
mod metric_definition_repository;
mod metric_result_cache;

pub use credential_store::*;
pub use data_source_adapter::*;
pub use metric_definition_repository::*;
pub use metric_result_cache::*;
