// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use meeting_search::*;
use serde::ser::{Serialize, SerializeMap, Serializer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const RESPONSE_TYPE_SUCCESS: &str = "success";
pub const RESPONSE_TYPE_BAD_REQUEST: &str = "error_bad_request";
pub const RESPONSE_TYPE_DATASOURCE: &str = "error_datasource";
pub const RESPONSE_TYPE_BAD_JSON: &str = "error_bad_json";

pub const SEARCH_DATASOURCE_MESSAGE: &str = "Unable to complete meeting search.";
pub const MEETING_DATASOURCE_MESSAGE: &str = "Invalid Meeting.";
pub const HEALTH_DATASOURCE_MESSAGE: &str = "Search engine is unreachable.";
pub const BAD_JSON_MESSAGE: &str = "Unable to serialize response.";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Envelope every endpoint answers with. The variant is announced by the
/// `response_type` field, HTTP status is always `200 OK`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(SuccessPayload),
    BadRequest(String),
    DatasourceError(String),
    BadJson(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuccessPayload {
    Search(SearchResultEnvelope),
    Meeting(RecordPayload),
    Health { healthy: bool },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ApiResponse {
    pub fn response_type(&self) -> &'static str {
        match self {
            Self::Success(_) => RESPONSE_TYPE_SUCCESS,
            Self::BadRequest(_) => RESPONSE_TYPE_BAD_REQUEST,
            Self::DatasourceError(_) => RESPONSE_TYPE_DATASOURCE,
            Self::BadJson(_) => RESPONSE_TYPE_BAD_JSON,
        }
    }

    pub fn from_search_result(result: Result<SearchResultEnvelope, MeetingSearchError>) -> Self {
        match result {
            Ok(envelope) => Self::Success(SuccessPayload::Search(envelope)),
            Err(MeetingSearchError::Validation(e)) => Self::bad_request(&e),
            Err(MeetingSearchError::Gateway(e)) => {
                Self::datasource_error(&e, SEARCH_DATASOURCE_MESSAGE)
            }
        }
    }

    pub fn from_meeting_result(result: Result<RecordPayload, GetMeetingError>) -> Self {
        match result {
            Ok(record) => Self::Success(SuccessPayload::Meeting(record)),
            Err(GetMeetingError::Validation(e)) => Self::bad_request(&e),
            Err(GetMeetingError::Gateway(e)) => {
                Self::datasource_error(&e, MEETING_DATASOURCE_MESSAGE)
            }
        }
    }

    pub fn from_health_result(result: Result<bool, GatewayError>) -> Self {
        match result {
            Ok(healthy) => Self::Success(SuccessPayload::Health { healthy }),
            Err(e) => Self::datasource_error(&e, HEALTH_DATASOURCE_MESSAGE),
        }
    }

    pub fn bad_request(e: &ValidationError) -> Self {
        tracing::info!(error_msg = %e, "Rejected invalid request");
        Self::BadRequest(e.to_string())
    }

    /// Engine details only go to the log, the caller gets a fixed message
    fn datasource_error(e: &GatewayError, message: &str) -> Self {
        match e {
            GatewayError::NotFound(e) => {
                tracing::info!(error_msg = %e, "Requested record does not exist");
            }
            GatewayError::Upstream(e) => {
                tracing::error!(
                    error = ?e,
                    error_msg = %e.reason(),
                    "Search engine request failed",
                );
            }
        }
        Self::DatasourceError(message.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("response_type", self.response_type())?;

        match self {
            Self::Success(SuccessPayload::Search(envelope)) => {
                map.serialize_entry("found", &envelope.found)?;
                map.serialize_entry("out_of", &envelope.out_of)?;
                map.serialize_entry("facet_counts", &envelope.facet_counts)?;
                map.serialize_entry("hits", &envelope.hits)?;
            }
            Self::Success(SuccessPayload::Meeting(record)) => {
                map.serialize_entry("meeting", record)?;
            }
            Self::Success(SuccessPayload::Health { healthy }) => {
                map.serialize_entry("healthy", healthy)?;
            }
            Self::BadRequest(message) | Self::DatasourceError(message) | Self::BadJson(message) => {
                map.serialize_entry("output", message)?;
            }
        }

        map.end()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let body = match serde_json::to_string(&self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    error_msg = %e,
                    response_type = self.response_type(),
                    "Failed to serialize API response",
                );
                serde_json::json!({
                    "response_type": RESPONSE_TYPE_BAD_JSON,
                    "output": BAD_JSON_MESSAGE,
                })
                .to_string()
            }
        };

        (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
