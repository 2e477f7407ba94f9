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
use meeting_search::{MeetingSearchQuery, MeetingSearchService};

use crate::ApiResponse;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSearchParams {
    pub keyphrase: Option<String>,
    pub public_body: Option<String>,
    /// Epoch seconds
    pub date_start: Option<String>,
    /// Epoch seconds
    pub date_end: Option<String>,
}

impl From<MeetingSearchParams> for MeetingSearchQuery {
    fn from(value: MeetingSearchParams) -> Self {
        Self {
            keyphrase: value.keyphrase,
            public_body: value.public_body,
            date_start: value.date_start,
            date_end: value.date_end,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Keyword search over meetings with optional body and date range filters
#[tracing::instrument(level = "info", skip_all)]
pub async fn meeting_search_handler(
    Extension(meeting_search_service): Extension<Arc<dyn MeetingSearchService>>,
    params: Result<Query<MeetingSearchParams>, QueryRejection>,
) -> ApiResponse {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return ApiResponse::BadRequest(rejection.body_text()),
    };

    let result = meeting_search_service.search_meetings(params.into()).await;

    ApiResponse::from_search_result(result)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
