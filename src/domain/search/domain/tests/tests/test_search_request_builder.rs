// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use meeting_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn builder() -> MeetingSearchRequestBuilder {
    MeetingSearchRequestBuilder::new(Arc::new(MeetingSearchConfig::default()))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_keyword_only_has_no_filter_clause() {
    let request = builder().build(Some("budget"), None, None, None).unwrap();

    assert_eq!(request.keyword(), "budget");
    assert_eq!(request.filter_by(), None);
    assert!(request.filters().is_empty());
    pretty_assertions::assert_eq!(
        request.queried_fields(),
        [
            MeetingField::LatestAgenda,
            MeetingField::LatestMinutes,
            MeetingField::Body
        ]
    );
    pretty_assertions::assert_eq!(request.facet_fields(), [MeetingField::Body]);
    assert_eq!(request.page_size(), 250);
    assert_eq!(request.max_facet_values(), 250);
}

#[test]
fn test_all_filters() {
    let request = builder()
        .build(
            Some("budget"),
            Some("City Council"),
            Some("1700000000"),
            Some("1705000000"),
        )
        .unwrap();

    pretty_assertions::assert_eq!(
        request.filter_by(),
        Some("body:=City Council && meeting_dt: >=1700000000 && meeting_dt: <=1705000000")
    );
    pretty_assertions::assert_eq!(
        request.filters(),
        [
            PredicateFragment::EqualsField {
                field: MeetingField::Body,
                value: "City Council".to_string()
            },
            PredicateFragment::RangeGte {
                field: MeetingField::MeetingDt,
                value: 1_700_000_000
            },
            PredicateFragment::RangeLte {
                field: MeetingField::MeetingDt,
                value: 1_705_000_000
            },
        ]
    );
}

#[test]
fn test_date_end_only() {
    let request = builder()
        .build(Some("zoning"), None, None, Some("1705000000"))
        .unwrap();

    assert_eq!(request.filter_by(), Some("meeting_dt: <=1705000000"));
}

#[test]
fn test_missing_keyword() {
    for keyword in [None, Some(""), Some("   ")] {
        assert_eq!(
            builder().build(keyword, Some("City Council"), None, None),
            Err(ValidationError::MissingKeyword),
            "{keyword:?}"
        );
    }
}

#[test]
fn test_malformed_dates() {
    assert_eq!(
        builder().build(Some("fire"), None, Some("not-a-number"), None),
        Err(ValidationError::MalformedDate {
            param: "dateStart",
            value: "not-a-number".to_string()
        })
    );
    assert_eq!(
        builder().build(Some("fire"), None, None, Some("1.5")),
        Err(ValidationError::MalformedDate {
            param: "dateEnd",
            value: "1.5".to_string()
        })
    );
    assert_eq!(
        builder().build(Some("fire"), None, Some(""), None),
        Err(ValidationError::MalformedDate {
            param: "dateStart",
            value: String::new()
        })
    );

    let err = builder()
        .build(Some("fire"), None, Some(" 17"), None)
        .unwrap_err();
    pretty_assertions::assert_eq!(
        err.to_string(),
        "Query parameter 'dateStart' must be an integer number of epoch seconds, got ' 17'."
    );
}

#[test]
fn test_empty_public_body_is_ignored() {
    let request = builder()
        .build(Some("budget"), Some(""), Some("1700000000"), None)
        .unwrap();

    assert_eq!(request.filter_by(), Some("meeting_dt: >=1700000000"));
}

#[test]
fn test_public_body_with_reserved_operator() {
    let res = builder().build(
        Some("budget"),
        Some("Council && is_private_notice:=true"),
        None,
        None,
    );

    assert_eq!(
        res,
        Err(ValidationError::ReservedFilterSyntax {
            param: "publicBody",
            operator: "&&"
        })
    );
    pretty_assertions::assert_eq!(
        res.unwrap_err().to_string(),
        "Query parameter 'publicBody' must not contain '&&'."
    );
}

#[test]
fn test_public_body_with_plain_ampersand_is_allowed() {
    let request = builder()
        .build(Some("parks"), Some("Parks & Recreation"), None, None)
        .unwrap();

    assert_eq!(request.filter_by(), Some("body:=Parks & Recreation"));
}

#[test]
fn test_stop_words_are_removed() {
    let request = builder()
        .build(Some("  the budget  and THE zoning "), None, None, None)
        .unwrap();

    assert_eq!(request.keyword(), "budget zoning");
}

#[test]
fn test_keyword_of_only_stop_words_is_kept() {
    let request = builder().build(Some("this is  it"), None, None, None).unwrap();
    assert_eq!(request.keyword(), "it");

    let request = builder().build(Some(" that is "), None, None, None).unwrap();
    assert_eq!(request.keyword(), "that is");
}

#[test]
fn test_built_keyword_is_never_empty() {
    for keyword in ["the", " a  an ", "\t\tto\n", "x"] {
        let request = builder().build(Some(keyword), None, None, None).unwrap();

        assert!(!request.keyword().is_empty(), "{keyword:?}");
        assert_eq!(request.keyword(), request.keyword().trim(), "{keyword:?}");
    }
}

#[test]
fn test_uses_injected_config() {
    let config = MeetingSearchConfig::try_new(
        vec![MeetingField::Body],
        vec![MeetingField::Body, MeetingField::MeetingDt],
        20,
        5,
        Vec::<String>::new(),
    )
    .unwrap();
    let builder = MeetingSearchRequestBuilder::new(Arc::new(config));

    let request = builder.build(Some("the budget"), None, None, None).unwrap();

    assert_eq!(request.keyword(), "the budget");
    pretty_assertions::assert_eq!(request.queried_fields(), [MeetingField::Body]);
    pretty_assertions::assert_eq!(
        request.facet_fields(),
        [MeetingField::Body, MeetingField::MeetingDt]
    );
    assert_eq!(request.page_size(), 20);
    assert_eq!(request.max_facet_values(), 5);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
