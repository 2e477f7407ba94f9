// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use crate::{MeetingField, UnknownFieldError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_QUERY_BY: [MeetingField; 3] = [
    MeetingField::LatestAgenda,
    MeetingField::LatestMinutes,
    MeetingField::Body,
];
pub const DEFAULT_FACET_BY: [MeetingField; 1] = [MeetingField::Body];
pub const DEFAULT_PAGE_SIZE: u32 = 250;
pub const DEFAULT_MAX_FACET_VALUES: u32 = 250;

/// Engine refuses larger pages
pub const MAX_PAGE_SIZE: u32 = 250;

pub const DEFAULT_STOP_WORDS: [&str; 14] = [
    "a", "the", "you", "we", "me", "i", "them", "this", "that", "is", "and", "but", "as", "or",
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fixed parameters applied to every search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSearchConfig {
    queried_fields: Vec<MeetingField>,
    facet_fields: Vec<MeetingField>,
    page_size: u32,
    max_facet_values: u32,
    stop_words: HashSet<String>,
}

impl MeetingSearchConfig {
    pub fn try_new(
        queried_fields: Vec<MeetingField>,
        facet_fields: Vec<MeetingField>,
        page_size: u32,
        max_facet_values: u32,
        stop_words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, InvalidMeetingSearchConfigError> {
        if queried_fields.is_empty() {
            return Err(InvalidMeetingSearchConfigError::NoQueriedFields);
        }
        if let Some(field) = queried_fields.iter().find(|f| !f.kind().is_textual()) {
            return Err(InvalidMeetingSearchConfigError::NotQueryable { field: *field });
        }
        if let Some(field) = facet_fields.iter().find(|f| !f.is_facet()) {
            return Err(InvalidMeetingSearchConfigError::NotFacetable { field: *field });
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(InvalidMeetingSearchConfigError::PageSizeOutOfRange { page_size });
        }

        Ok(Self {
            queried_fields,
            facet_fields,
            page_size,
            max_facet_values,
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        })
    }

    /// Resolves field names as they appear in configuration files
    pub fn try_from_names(
        query_by: &[impl AsRef<str>],
        facet_by: &[impl AsRef<str>],
        page_size: u32,
        max_facet_values: u32,
        stop_words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, InvalidMeetingSearchConfigError> {
        let queried_fields = query_by
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<MeetingField>, _>>()?;
        let facet_fields = facet_by
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<MeetingField>, _>>()?;

        Self::try_new(
            queried_fields,
            facet_fields,
            page_size,
            max_facet_values,
            stop_words,
        )
    }

    pub fn queried_fields(&self) -> &[MeetingField] {
        &self.queried_fields
    }

    pub fn facet_fields(&self) -> &[MeetingField] {
        &self.facet_fields
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_facet_values(&self) -> u32 {
        self.max_facet_values
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

impl Default for MeetingSearchConfig {
    fn default() -> Self {
        Self {
            queried_fields: DEFAULT_QUERY_BY.to_vec(),
            facet_fields: DEFAULT_FACET_BY.to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
            max_facet_values: DEFAULT_MAX_FACET_VALUES,
            stop_words: DEFAULT_STOP_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMeetingSearchConfigError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("At least one queried field is required")]
    NoQueriedFields,

    #[error("Field '{field}' is not a text field and cannot be queried")]
    NotQueryable { field: MeetingField },

    #[error("Field '{field}' is not declared as a facet")]
    NotFacetable { field: MeetingField },

    #[error("Page size must be between 1 and 250, got {page_size}")]
    PageSizeOutOfRange { page_size: u32 },
}
