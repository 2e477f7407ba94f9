// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use http::StatusCode;
use internal_error::{ErrorIntoInternal, InternalError, ResultIntoInternal};
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use super::*;
use crate::TypesenseConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Thin wrapper over the handful of Typesense endpoints we use
pub struct TypesenseClient {
    client: reqwest::Client,
    base_url: url::Url,
    collection: String,
}

impl TypesenseClient {
    pub fn init(config: &TypesenseConfig) -> Result<Self, InternalError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key.expose_secret()).int_err()?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .int_err()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
            collection: config.collection.clone(),
        })
    }

    pub async fn search(
        &self,
        params: &TsSearchParams<'_>,
    ) -> Result<TsSearchResponse, TsClientError> {
        let url = self.endpoint(&["collections", &self.collection, "documents", "search"])?;

        let response = self.client.get(url).query(params).send().await.int_err()?;

        Self::read_json(response).await
    }

    pub async fn get_document(&self, id: &str) -> Result<TsDocument, TsClientError> {
        let url = self.endpoint(&["collections", &self.collection, "documents", id])?;

        let response = self.client.get(url).send().await.int_err()?;

        Self::read_json(response).await
    }

    pub async fn health(&self) -> Result<TsHealthResponse, TsClientError> {
        let url = self.endpoint(&["health"])?;

        let response = self.client.get(url).send().await.int_err()?;

        // A node that is still catching up answers 503 with a regular health body
        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await.int_err()?);
        }

        Self::read_json(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<url::Url, InternalError> {
        let mut url = self.base_url.clone();

        // Each segment is percent-encoded on its own, so ids can't escape their slot
        url.path_segments_mut()
            .map_err(|()| {
                InternalError::new(format!("Typesense URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TsClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await.int_err()?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<TsErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        let err = TypesenseApiError { status, message };
        if status == StatusCode::NOT_FOUND {
            Err(TsClientError::NotFound(err))
        } else {
            Err(TsClientError::Internal(err.int_err()))
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum TsClientError {
    #[error(transparent)]
    NotFound(TypesenseApiError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Debug, thiserror::Error)]
#[error("Typesense responded with {status}: {message}")]
pub struct TypesenseApiError {
    pub status: StatusCode,
    pub message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
