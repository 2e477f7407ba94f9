// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::{RecordPayload, SearchRequest, SearchResultEnvelope};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Boundary to the external full-text search engine
#[async_trait::async_trait]
pub trait SearchGateway: Send + Sync {
    async fn execute(&self, request: &SearchRequest)
    -> Result<SearchResultEnvelope, GatewayError>;

    async fn fetch_by_id(&self, id: &str) -> Result<RecordPayload, GatewayError>;

    /// Whether the engine reports itself as able to serve queries
    async fn health(&self) -> Result<bool, GatewayError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    NotFound(#[from] RecordNotFoundError),

    #[error(transparent)]
    Upstream(#[from] InternalError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Record '{id}' not found")]
pub struct RecordNotFoundError {
    pub id: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
