// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{MeetingField, MeetingFieldKind};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PARAM_PUBLIC_BODY: &str = "publicBody";
pub const PARAM_DATE_START: &str = "dateStart";
pub const PARAM_DATE_END: &str = "dateEnd";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client-caused failures. Messages are shown to the caller as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Must include a 'keyphrase' query.")]
    MissingKeyword,

    #[error("Must include an 'id' query.")]
    MissingId,

    #[error("Query parameter '{param}' must be an integer number of epoch seconds, got '{value}'.")]
    MalformedDate { param: &'static str, value: String },

    #[error("Query parameter '{param}' must not contain '{operator}'.")]
    ReservedFilterSyntax {
        param: &'static str,
        operator: &'static str,
    },

    #[error("Field '{field}' of type {kind} cannot be used in {predicate} predicate.")]
    IncompatibleField {
        field: MeetingField,
        kind: MeetingFieldKind,
        predicate: &'static str,
    },
}
