// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod filter_expr;
mod meeting_schema;
mod meeting_search_config;
mod search_request;
mod search_request_builder;
mod search_result;
mod validation_error;

pub use filter_expr::*;
pub use meeting_schema::*;
pub use meeting_search_config::*;
pub use search_request::*;
pub use search_request_builder::*;
pub use search_result::*;
pub use validation_error::*;
