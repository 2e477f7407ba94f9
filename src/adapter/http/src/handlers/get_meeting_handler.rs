// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query};
use meeting_search::MeetingSearchService;

use crate::ApiResponse;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, serde::Deserialize)]
pub struct GetMeetingParams {
    pub id: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tracing::instrument(level = "info", skip_all)]
pub async fn get_meeting_handler(
    Extension(meeting_search_service): Extension<Arc<dyn MeetingSearchService>>,
    params: Result<Query<GetMeetingParams>, QueryRejection>,
) -> ApiResponse {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return ApiResponse::BadRequest(rejection.body_text()),
    };

    let result = meeting_search_service.get_meeting(params.id).await;

    ApiResponse::from_meeting_result(result)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
