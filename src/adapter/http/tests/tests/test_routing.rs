// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::ErrorIntoInternal;
use meeting_search::testing::MockMeetingSearchService;
use meeting_search::*;
use serde_json::json;

use crate::harness::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn get_json(url: url::Url) -> serde_json::Value {
    let res = reqwest::Client::new().get(url).send().await.unwrap();

    assert_eq!(res.status(), http::StatusCode::OK);
    assert_eq!(
        res.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    res.json().await.unwrap()
}

fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    let serde_json::Value::Object(map) = value else {
        panic!("not an object: {value}")
    };
    map
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_meeting_search_passes_params_and_returns_envelope() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_search_meetings()
        .withf(|query| {
            *query
                == MeetingSearchQuery {
                    keyphrase: Some("budget hearing".to_string()),
                    public_body: Some("City Council".to_string()),
                    date_start: Some("1700000000".to_string()),
                    date_end: None,
                }
        })
        .times(1)
        .return_once(|_| {
            Ok(SearchResultEnvelope {
                found: 2,
                out_of: 10,
                facet_counts: vec![json!({"body": 3})],
                hits: vec![object(json!({"id": "a"})), object(json!({"id": "b"}))],
            })
        });

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url(
        "/meetingSearch?keyphrase=budget%20hearing&publicBody=City%20Council&dateStart=1700000000",
    );

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "success",
                "found": 2,
                "out_of": 10,
                "facet_counts": [{"body": 3}],
                "hits": [{"id": "a"}, {"id": "b"}],
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_meeting_search_validation_error() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_search_meetings()
        .times(1)
        .return_once(|_| Err(ValidationError::MissingKeyword.into()));

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/meetingSearch");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "error_bad_request",
                "output": "Must include a 'keyphrase' query.",
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_meeting_search_engine_failure() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_search_meetings().times(1).return_once(|_| {
        Err(GatewayError::Upstream("connection refused".int_err()).into())
    });

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/meetingSearch?keyphrase=zoning");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "error_datasource",
                "output": "Unable to complete meeting search.",
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_meeting_search_rejects_duplicate_params() {
    // No expectations: reaching the service fails the test
    let mock = MockMeetingSearchService::new();

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/meetingSearch?keyphrase=a&keyphrase=b");

    let client = async move {
        let body = get_json(url).await;

        assert_eq!(body["response_type"], "error_bad_request");
        assert!(
            body["output"]
                .as_str()
                .unwrap()
                .starts_with("Failed to deserialize query string"),
            "{body}"
        );
    };

    await_client_server_flow!(server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_get_meeting_without_id() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_get_meeting()
        .with(mockall::predicate::eq(None::<String>))
        .times(1)
        .return_once(|_| Err(ValidationError::MissingId.into()));

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/getMeeting");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "error_bad_request",
                "output": "Must include an 'id' query.",
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_get_meeting_found() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_get_meeting()
        .with(mockall::predicate::eq(Some("2024/03 budget?".to_string())))
        .times(1)
        .return_once(|_| Ok(object(json!({"id": "2024/03 budget?", "body": "City Council"}))));

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/getMeeting?id=2024%2F03%20budget%3F");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "success",
                "meeting": {"id": "2024/03 budget?", "body": "City Council"},
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_get_meeting_not_found() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_get_meeting().times(1).return_once(|id| {
        Err(GatewayError::NotFound(RecordNotFoundError {
            id: id.unwrap_or_default(),
        })
        .into())
    });

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/getMeeting?id=missing");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({
                "response_type": "error_datasource",
                "output": "Invalid Meeting.",
            })
        );
    };

    await_client_server_flow!(server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_health() {
    let mut mock = MockMeetingSearchService::new();
    mock.expect_engine_health().times(1).return_once(|| Ok(true));

    let server = TestAPIServer::new(Arc::new(mock)).await;
    let url = server.url("/health");

    let client = async move {
        pretty_assertions::assert_eq!(
            get_json(url).await,
            json!({"response_type": "success", "healthy": true})
        );
    };

    await_client_server_flow!(server.run(), client);
}

#[test_log::test(tokio::test)]
async fn test_unknown_route() {
    let server = TestAPIServer::new(Arc::new(MockMeetingSearchService::new())).await;
    let url = server.url("/meetings/search");

    let client = async move {
        let res = reqwest::Client::new()
            .get(url)
            .header(http::header::ORIGIN, "http://frontend.example.org")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(
            res.headers()
                .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert_eq!(res.text().await.unwrap(), "No such resource");
    };

    await_client_server_flow!(server.run(), client);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
