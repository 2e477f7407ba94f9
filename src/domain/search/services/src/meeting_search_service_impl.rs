// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use meeting_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct MeetingSearchServiceImpl {
    request_builder: MeetingSearchRequestBuilder,
    search_gateway: Arc<dyn SearchGateway>,
}

#[dill::component(pub)]
#[dill::interface(dyn MeetingSearchService)]
impl MeetingSearchServiceImpl {
    pub fn new(config: Arc<MeetingSearchConfig>, search_gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            request_builder: MeetingSearchRequestBuilder::new(config),
            search_gateway,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MeetingSearchService for MeetingSearchServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = "MeetingSearchServiceImpl_search_meetings",
        skip_all,
        fields(keyphrase = ?query.keyphrase, public_body = ?query.public_body)
    )]
    async fn search_meetings(
        &self,
        query: MeetingSearchQuery,
    ) -> Result<SearchResultEnvelope, MeetingSearchError> {
        let request = self.request_builder.build(
            query.keyphrase.as_deref(),
            query.public_body.as_deref(),
            query.date_start.as_deref(),
            query.date_end.as_deref(),
        )?;

        tracing::debug!(
            keyword = request.keyword(),
            filter_by = ?request.filter_by(),
            "Executing meeting search"
        );

        let envelope = self.search_gateway.execute(&request).await?;

        tracing::debug!(
            found = envelope.found,
            out_of = envelope.out_of,
            num_hits = envelope.hits.len(),
            "Meeting search completed"
        );

        Ok(envelope)
    }

    #[tracing::instrument(level = "debug", name = "MeetingSearchServiceImpl_get_meeting", skip_all, fields(?id))]
    async fn get_meeting(&self, id: Option<String>) -> Result<RecordPayload, GetMeetingError> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Err(ValidationError::MissingId.into());
        };

        let record = self.search_gateway.fetch_by_id(&id).await?;
        Ok(record)
    }

    #[tracing::instrument(level = "debug", name = "MeetingSearchServiceImpl_engine_health", skip_all)]
    async fn engine_health(&self) -> Result<bool, GatewayError> {
        self.search_gateway.health().await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
