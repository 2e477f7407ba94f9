// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Extension;
use internal_error::*;
use meeting_search::MeetingSearchService;
use meeting_search_services::MeetingSearchServiceImpl;
use meeting_search_typesense::{ENV_TYPESENSE_API_KEY, TypesenseSearchGateway};
use observability::axum::unknown_fallback_handler;

use crate::{Cli, ENV_CONFIG_OVERRIDE_PREFIX, ServerConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "meeting-search-server";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(cli: Cli) -> Result<(), InternalError> {
    let mut config =
        ServerConfig::load(cli.config.as_deref(), ENV_CONFIG_OVERRIDE_PREFIX).int_err()?;
    config.apply_api_key_override(std::env::var(ENV_TYPESENSE_API_KEY).ok());
    cli.apply_overrides(&mut config);

    observability::logging::init(&config.logging);
    observability::panic_handler::set_hook_trace_panics(false);

    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        ?config,
        "Initializing {BINARY_NAME}"
    );

    let catalog = build_catalog(&config)?;
    let meeting_search_service = catalog
        .get_one::<dyn MeetingSearchService>()
        .int_err()?;

    let addr = SocketAddr::new(config.http.address, config.http.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context_int_err(format!("binding {addr}"))?;

    tracing::info!(
        local_addr = %listener.local_addr().int_err()?,
        "HTTP server is listening"
    );

    axum::serve(
        listener,
        build_router(meeting_search_service).into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .int_err()?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Validates configuration into domain values and wires the components
pub fn build_catalog(config: &ServerConfig) -> Result<dill::Catalog, InternalError> {
    let meeting_search_config = config.meeting_search_config().int_err()?;
    let typesense_config = config.typesense_config().int_err()?;

    let mut b = dill::CatalogBuilder::new();

    b.add_value(meeting_search_config);
    b.add_value(typesense_config);
    b.add::<TypesenseSearchGateway>();
    b.add::<MeetingSearchServiceImpl>();

    Ok(b.build())
}

pub fn build_router(meeting_search_service: Arc<dyn MeetingSearchService>) -> axum::Router {
    meeting_search_adapter_http::root_router()
        .fallback(unknown_fallback_handler)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([http::Method::GET]),
        )
        .layer(Extension(meeting_search_service))
        .layer(observability::axum::http_layer())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, error_msg = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
