// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Turns raw query parameters into a [`SearchRequest`]
pub struct MeetingSearchRequestBuilder {
    config: Arc<MeetingSearchConfig>,
}

impl MeetingSearchRequestBuilder {
    pub fn new(config: Arc<MeetingSearchConfig>) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        keyword: Option<&str>,
        public_body: Option<&str>,
        date_start: Option<&str>,
        date_end: Option<&str>,
    ) -> Result<SearchRequest, ValidationError> {
        let keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingKeyword)?;

        let mut filters = Vec::new();

        // An empty value is what forms send for an unselected body
        if let Some(public_body) = public_body.filter(|b| !b.is_empty()) {
            if let Some(operator) = FilterExpression::find_reserved_operator(public_body) {
                return Err(ValidationError::ReservedFilterSyntax {
                    param: PARAM_PUBLIC_BODY,
                    operator,
                });
            }
            filters.push(PredicateFragment::equals(MeetingField::Body, public_body)?);
        }

        if let Some(date_start) = date_start {
            let value = parse_epoch_seconds(PARAM_DATE_START, date_start)?;
            filters.push(PredicateFragment::range_gte(MeetingField::MeetingDt, value)?);
        }

        if let Some(date_end) = date_end {
            let value = parse_epoch_seconds(PARAM_DATE_END, date_end)?;
            filters.push(PredicateFragment::range_lte(MeetingField::MeetingDt, value)?);
        }

        Ok(SearchRequest::new(
            self.strip_stop_words(keyword),
            filters,
            &self.config,
        ))
    }

    /// Drops stop words, unless nothing else would be left to search for
    fn strip_stop_words(&self, keyword: &str) -> String {
        let words: Vec<&str> = keyword
            .split_whitespace()
            .filter(|w| !self.config.is_stop_word(w))
            .collect();

        if words.is_empty() {
            keyword.to_string()
        } else {
            words.join(" ")
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn parse_epoch_seconds(param: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::MalformedDate {
            param,
            value: value.to_string(),
        })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
