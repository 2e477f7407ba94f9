// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use axum::extract::Extension;
use meeting_search::MeetingSearchService;

use crate::ApiResponse;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reports whether the search engine behind the service can take queries
pub async fn health_handler(
    Extension(meeting_search_service): Extension<Arc<dyn MeetingSearchService>>,
) -> ApiResponse {
    ApiResponse::from_health_result(meeting_search_service.engine_health().await)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
