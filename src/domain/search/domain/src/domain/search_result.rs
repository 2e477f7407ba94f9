// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One matched record, passed through exactly as the engine returned it
pub type Hit = serde_json::Map<String, serde_json::Value>;

/// Stored document returned by lookup-by-id
pub type RecordPayload = serde_json::Map<String, serde_json::Value>;

/// Per-field value counts, shape owned by the engine
pub type FacetCount = serde_json::Value;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultEnvelope {
    pub found: u64,
    pub out_of: u64,
    pub facet_counts: Vec<FacetCount>,
    pub hits: Vec<Hit>,
}
