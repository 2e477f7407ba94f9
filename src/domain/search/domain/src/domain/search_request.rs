// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{FilterExpression, MeetingField, MeetingSearchConfig, PredicateFragment};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A fully validated search ready to be sent to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keyword: String,
    queried_fields: Vec<MeetingField>,
    facet_fields: Vec<MeetingField>,
    filters: Vec<PredicateFragment>,
    filter_by: Option<String>,
    page_size: u32,
    max_facet_values: u32,
}

impl SearchRequest {
    pub(crate) fn new(
        keyword: String,
        filters: Vec<PredicateFragment>,
        config: &MeetingSearchConfig,
    ) -> Self {
        debug_assert!(!keyword.is_empty());

        let filter_by = FilterExpression::render(&filters);

        Self {
            keyword,
            queried_fields: config.queried_fields().to_vec(),
            facet_fields: config.facet_fields().to_vec(),
            filters,
            filter_by,
            page_size: config.page_size(),
            max_facet_values: config.max_facet_values(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn queried_fields(&self) -> &[MeetingField] {
        &self.queried_fields
    }

    pub fn facet_fields(&self) -> &[MeetingField] {
        &self.facet_fields
    }

    pub fn filters(&self) -> &[PredicateFragment] {
        &self.filters
    }

    /// Rendered filter expression, absent when no predicates were supplied
    pub fn filter_by(&self) -> Option<&str> {
        self.filter_by.as_deref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_facet_values(&self) -> u32 {
        self.max_facet_values
    }
}
