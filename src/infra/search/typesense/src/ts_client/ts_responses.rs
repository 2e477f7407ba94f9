// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use meeting_search::{FacetCount, Hit, RecordPayload, SearchRequest, SearchResultEnvelope};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Serialize)]
pub struct TsSearchParams<'a> {
    pub q: &'a str,
    pub query_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub facet_by: String,
    pub per_page: u32,
    pub max_facet_values: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<&'a str>,
}

impl<'a> TsSearchParams<'a> {
    pub fn from_request(request: &'a SearchRequest) -> Self {
        let join = |fields: &[meeting_search::MeetingField]| {
            fields
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(",")
        };

        Self {
            q: request.keyword(),
            query_by: join(request.queried_fields()),
            facet_by: join(request.facet_fields()),
            per_page: request.page_size(),
            max_facet_values: request.max_facet_values(),
            filter_by: request.filter_by(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
pub struct TsSearchResponse {
    pub found: u64,
    pub out_of: u64,
    #[serde(default)]
    pub facet_counts: Vec<FacetCount>,
    #[serde(default)]
    pub hits: Vec<Hit>,
    pub search_time_ms: Option<u64>,
}

impl TsSearchResponse {
    pub fn into_envelope(self) -> SearchResultEnvelope {
        SearchResultEnvelope {
            found: self.found,
            out_of: self.out_of,
            facet_counts: self.facet_counts,
            hits: self.hits,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type TsDocument = RecordPayload;

#[derive(Debug, serde::Deserialize)]
pub struct TsHealthResponse {
    pub ok: bool,
}

#[derive(Debug, serde::Deserialize)]
pub struct TsErrorResponse {
    pub message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
