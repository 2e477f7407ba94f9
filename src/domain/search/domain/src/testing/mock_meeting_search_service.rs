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

mockall::mock! {
    pub MeetingSearchService {}
    #[async_trait::async_trait]
    impl MeetingSearchService for MeetingSearchService {
        async fn search_meetings(&self, query: MeetingSearchQuery) -> Result<SearchResultEnvelope, MeetingSearchError>;
        async fn get_meeting(&self, id: Option<String>) -> Result<RecordPayload, GetMeetingError>;
        async fn engine_health(&self) -> Result<bool, GatewayError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
