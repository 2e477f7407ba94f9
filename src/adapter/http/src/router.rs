// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::routing::get;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Routes of the public API. Handlers expect an
/// `Extension<Arc<dyn MeetingSearchService>>` layer on top.
pub fn root_router() -> axum::Router {
    axum::Router::new()
        .route("/meetingSearch", get(meeting_search_handler))
        .route("/getMeeting", get(get_meeting_handler))
        .route("/health", get(health_handler))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
