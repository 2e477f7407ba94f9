// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use axum::extract::MatchedPath;
use axum::response::IntoResponse;
use tower_http::trace::{DefaultOnRequest, HttpMakeClassifier, TraceLayer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn unknown_fallback_handler(method: http::Method, uri: http::Uri) -> impl IntoResponse {
    tracing::info!(%method, %uri, "Unknown route");
    (http::StatusCode::NOT_FOUND, "No such resource")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type HttpTraceLayer =
    TraceLayer<HttpMakeClassifier, HttpMakeSpan, DefaultOnRequest, HttpOnResponse>;

pub fn http_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(HttpMakeSpan)
        .on_request(DefaultOnRequest::new())
        .on_response(HttpOnResponse)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy)]
pub struct HttpMakeSpan;

impl<B> tower_http::trace::MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &http::Request<B>) -> tracing::Span {
        // Prefer the route template so spans of the same endpoint group together
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map_or_else(|| request.uri().path(), MatchedPath::as_str);

        tracing::info_span!(
            "http_request",
            http.method = %request.method(),
            http.route = route,
            http.uri = %request.uri(),
            http.status_code = tracing::field::Empty,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy)]
pub struct HttpOnResponse;

impl<B> tower_http::trace::OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &http::Response<B>, latency: Duration, span: &tracing::Span) {
        let status = response.status().as_u16();
        span.record("http.status_code", status);

        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(status, latency_ms, "Request handled");
    }
}
