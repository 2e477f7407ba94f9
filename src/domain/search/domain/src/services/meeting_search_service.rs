// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait MeetingSearchService: Send + Sync {
    async fn search_meetings(
        &self,
        query: MeetingSearchQuery,
    ) -> Result<SearchResultEnvelope, MeetingSearchError>;

    async fn get_meeting(&self, id: Option<String>) -> Result<RecordPayload, GetMeetingError>;

    async fn engine_health(&self) -> Result<bool, GatewayError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Search parameters exactly as received, validation happens in the service
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MeetingSearchQuery {
    pub keyphrase: Option<String>,
    pub public_body: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum MeetingSearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, thiserror::Error)]
pub enum GetMeetingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
