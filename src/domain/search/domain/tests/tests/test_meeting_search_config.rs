// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use meeting_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_defaults() {
    let config = MeetingSearchConfig::default();

    pretty_assertions::assert_eq!(
        config.queried_fields(),
        [
            MeetingField::LatestAgenda,
            MeetingField::LatestMinutes,
            MeetingField::Body
        ]
    );
    pretty_assertions::assert_eq!(config.facet_fields(), [MeetingField::Body]);
    assert_eq!(config.page_size(), 250);
    assert_eq!(config.max_facet_values(), 250);
    assert!(config.is_stop_word("the"));
    assert!(config.is_stop_word("The"));
    assert!(!config.is_stop_word("budget"));
}

#[test]
fn test_from_names() {
    let config = MeetingSearchConfig::try_from_names(
        &["body", "address"],
        &["body", "contactPerson"],
        50,
        10,
        ["Of"],
    )
    .unwrap();

    pretty_assertions::assert_eq!(
        config.queried_fields(),
        [MeetingField::Body, MeetingField::Address]
    );
    pretty_assertions::assert_eq!(
        config.facet_fields(),
        [MeetingField::Body, MeetingField::ContactPerson]
    );
    assert!(config.is_stop_word("of"));
    assert!(!config.is_stop_word("the"));
}

#[test]
fn test_rejects_unknown_field_names() {
    let res = MeetingSearchConfig::try_from_names(&["agenda"], &["body"], 250, 250, DEFAULT_STOP_WORDS);

    assert_eq!(
        res,
        Err(InvalidMeetingSearchConfigError::UnknownField(UnknownFieldError {
            field_name: "agenda".to_string()
        }))
    );
}

#[test]
fn test_rejects_non_text_queried_fields() {
    let res = MeetingSearchConfig::try_new(
        vec![MeetingField::Body, MeetingField::MeetingDt],
        vec![],
        250,
        250,
        DEFAULT_STOP_WORDS,
    );

    assert_eq!(
        res,
        Err(InvalidMeetingSearchConfigError::NotQueryable {
            field: MeetingField::MeetingDt
        })
    );
}

#[test]
fn test_rejects_undeclared_facets() {
    let res = MeetingSearchConfig::try_new(
        vec![MeetingField::Body],
        vec![MeetingField::Address],
        250,
        250,
        DEFAULT_STOP_WORDS,
    );

    let err = res.unwrap_err();
    pretty_assertions::assert_eq!(err.to_string(), "Field 'address' is not declared as a facet");
}

#[test]
fn test_rejects_empty_query_by_and_bad_page_size() {
    assert_eq!(
        MeetingSearchConfig::try_new(vec![], vec![], 250, 250, DEFAULT_STOP_WORDS),
        Err(InvalidMeetingSearchConfigError::NoQueriedFields)
    );
    assert_eq!(
        MeetingSearchConfig::try_new(vec![MeetingField::Body], vec![], 0, 250, DEFAULT_STOP_WORDS),
        Err(InvalidMeetingSearchConfigError::PageSizeOutOfRange { page_size: 0 })
    );
    assert_eq!(
        MeetingSearchConfig::try_new(vec![MeetingField::Body], vec![], 251, 250, DEFAULT_STOP_WORDS),
        Err(InvalidMeetingSearchConfigError::PageSizeOutOfRange { page_size: 251 })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
