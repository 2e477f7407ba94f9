// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod mock_meeting_search_service;
mod mock_search_gateway;

pub use mock_meeting_search_service::*;
pub use mock_search_gateway::*;
