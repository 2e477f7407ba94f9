// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::ErrorIntoInternal;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub SearchGateway {}
    #[async_trait::async_trait]
    impl SearchGateway for SearchGateway {
        async fn execute(&self, request: &SearchRequest) -> Result<SearchResultEnvelope, GatewayError>;
        async fn fetch_by_id(&self, id: &str) -> Result<RecordPayload, GatewayError>;
        async fn health(&self) -> Result<bool, GatewayError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl MockSearchGateway {
    pub fn with_search_result(envelope: SearchResultEnvelope) -> Self {
        let mut mock = Self::new();
        mock.expect_execute()
            .times(1)
            .return_once(move |_| Ok(envelope));
        mock
    }

    pub fn with_record(id: &str, record: RecordPayload) -> Self {
        let mut mock = Self::new();
        mock.expect_fetch_by_id()
            .with(mockall::predicate::eq(id.to_string()))
            .times(1)
            .return_once(move |_| Ok(record));
        mock
    }

    pub fn with_missing_record() -> Self {
        let mut mock = Self::new();
        mock.expect_fetch_by_id().times(1).returning(|id| {
            Err(GatewayError::NotFound(RecordNotFoundError { id: id.to_string() }))
        });
        mock
    }

    pub fn unavailable() -> Self {
        let mut mock = Self::new();
        mock.expect_execute()
            .returning(|_| Err(GatewayError::Upstream("connection refused".int_err())));
        mock.expect_fetch_by_id()
            .returning(|_| Err(GatewayError::Upstream("connection refused".int_err())));
        mock.expect_health()
            .returning(|| Err(GatewayError::Upstream("connection refused".int_err())));
        mock
    }

    /// Fails the test if any call reaches the engine
    pub fn untouched() -> Self {
        let mut mock = Self::new();
        mock.expect_execute().never();
        mock.expect_fetch_by_id().never();
        mock.expect_health().never();
        mock
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
