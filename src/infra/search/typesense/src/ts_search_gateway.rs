// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use internal_error::{ErrorIntoInternal, InternalError};
use meeting_search::*;

use crate::TypesenseConfig;
use crate::ts_client::{TsClientError, TsSearchParams, TypesenseClient};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ids that address collection-level endpoints under `documents/`
const RESERVED_DOCUMENT_IDS: [&str; 3] = ["search", "export", "import"];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct TypesenseSearchGateway {
    config: Arc<TypesenseConfig>,
    client: tokio::sync::OnceCell<TypesenseClient>,
}

#[dill::component(pub)]
#[dill::scope(dill::Singleton)]
#[dill::interface(dyn SearchGateway)]
impl TypesenseSearchGateway {
    pub fn new(config: Arc<TypesenseConfig>) -> Self {
        Self {
            config,
            client: tokio::sync::OnceCell::new(),
        }
    }

    async fn ts_client(&self) -> Result<&TypesenseClient, InternalError> {
        self.client
            .get_or_try_init(|| async { TypesenseClient::init(&self.config) })
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SearchGateway for TypesenseSearchGateway {
    #[tracing::instrument(
        level = "debug",
        name = "TypesenseSearchGateway_execute",
        skip_all,
        fields(
            collection = %self.config.collection,
            keyword = request.keyword(),
            filter_by = ?request.filter_by(),
        )
    )]
    async fn execute(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResultEnvelope, GatewayError> {
        let client = self.ts_client().await?;

        let response = client
            .search(&TsSearchParams::from_request(request))
            .await
            .map_err(upstream)?;

        tracing::debug!(
            found = response.found,
            out_of = response.out_of,
            search_time_ms = ?response.search_time_ms,
            "Typesense search completed"
        );

        Ok(response.into_envelope())
    }

    #[tracing::instrument(
        level = "debug",
        name = "TypesenseSearchGateway_fetch_by_id",
        skip_all,
        fields(collection = %self.config.collection, %id)
    )]
    async fn fetch_by_id(&self, id: &str) -> Result<RecordPayload, GatewayError> {
        if RESERVED_DOCUMENT_IDS.contains(&id) {
            tracing::debug!("Id names a collection endpoint, no document can have it");
            return Err(GatewayError::NotFound(RecordNotFoundError {
                id: id.to_string(),
            }));
        }

        let client = self.ts_client().await?;

        client.get_document(id).await.map_err(|e| match e {
            TsClientError::NotFound(_) => {
                GatewayError::NotFound(RecordNotFoundError { id: id.to_string() })
            }
            TsClientError::Internal(e) => GatewayError::Upstream(e),
        })
    }

    #[tracing::instrument(level = "debug", name = "TypesenseSearchGateway_health", skip_all)]
    async fn health(&self) -> Result<bool, GatewayError> {
        let client = self.ts_client().await?;

        let health = client.health().await.map_err(upstream)?;

        Ok(health.ok)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Outside of document lookups a 404 means the collection itself is missing,
/// which is a deployment problem rather than a missing record
fn upstream(e: TsClientError) -> GatewayError {
    match e {
        TsClientError::NotFound(e) => GatewayError::Upstream(e.int_err()),
        TsClientError::Internal(e) => GatewayError::Upstream(e),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
