// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use crate::{MeetingField, ValidationError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Logical operators of the engine's filter grammar. Equality values must not
/// contain them or they would splice extra clauses into the expression.
pub const RESERVED_FILTER_OPERATORS: [&str; 2] = ["&&", "||"];

const CLAUSE_SEPARATOR: &str = " && ";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateFragment {
    EqualsField { field: MeetingField, value: String },
    RangeGte { field: MeetingField, value: i64 },
    RangeLte { field: MeetingField, value: i64 },
}

impl PredicateFragment {
    pub fn equals(field: MeetingField, value: impl Into<String>) -> Result<Self, ValidationError> {
        if field.kind().is_numeric() {
            return Err(Self::incompatible(field, "equality"));
        }
        Ok(Self::EqualsField {
            field,
            value: value.into(),
        })
    }

    pub fn range_gte(field: MeetingField, value: i64) -> Result<Self, ValidationError> {
        if !field.kind().is_numeric() {
            return Err(Self::incompatible(field, "range"));
        }
        Ok(Self::RangeGte { field, value })
    }

    pub fn range_lte(field: MeetingField, value: i64) -> Result<Self, ValidationError> {
        if !field.kind().is_numeric() {
            return Err(Self::incompatible(field, "range"));
        }
        Ok(Self::RangeLte { field, value })
    }

    fn incompatible(field: MeetingField, predicate: &'static str) -> ValidationError {
        ValidationError::IncompatibleField {
            field,
            kind: field.kind(),
            predicate,
        }
    }
}

impl fmt::Display for PredicateFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualsField { field, value } => write!(f, "{field}:={value}"),
            Self::RangeGte { field, value } => write!(f, "{field}: >={value}"),
            Self::RangeLte { field, value } => write!(f, "{field}: <={value}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct FilterExpression;

impl FilterExpression {
    /// Joins fragments with AND in the order given. No fragments means no
    /// filter clause at all, which is different from an empty filter.
    pub fn render(fragments: &[PredicateFragment]) -> Option<String> {
        if fragments.is_empty() {
            return None;
        }

        Some(
            fragments
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(CLAUSE_SEPARATOR),
        )
    }

    /// Returns the first reserved operator found in a raw equality value
    pub fn find_reserved_operator(value: &str) -> Option<&'static str> {
        RESERVED_FILTER_OPERATORS
            .into_iter()
            .find(|op| value.contains(op))
    }
}
