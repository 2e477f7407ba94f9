// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;
use std::str::FromStr;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fields of a meeting document as stored in the search collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeetingField {
    Id,
    Body,
    MeetingDt,
    Address,
    FilingDt,
    IsEmergency,
    IsAnnualCalendar,
    IsPrivateNotice,
    IsCancelled,
    CancelledDt,
    CancelledReason,
    LatestAgenda,
    LatestAgendaLink,
    LatestMinutes,
    LatestMinutesLink,
    ContactPerson,
    ContactEmail,
    ContactPhone,
}

impl MeetingField {
    pub fn as_str(self) -> &'static str {
        self.schema().name
    }

    pub fn kind(self) -> MeetingFieldKind {
        self.schema().kind
    }

    pub fn is_facet(self) -> bool {
        self.schema().facet
    }

    pub fn schema(self) -> &'static MeetingSchemaField {
        // Table rows follow the declaration order of the enum
        &MEETING_SCHEMA[self as usize]
    }
}

impl fmt::Display for MeetingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MEETING_SCHEMA
            .iter()
            .find(|f| f.name == s)
            .map(|f| f.field)
            .ok_or_else(|| UnknownFieldError {
                field_name: s.to_string(),
            })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingFieldKind {
    String,
    Float,
    Bool,
}

impl MeetingFieldKind {
    pub fn is_textual(self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float)
    }
}

impl fmt::Display for MeetingFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Float => "float",
            Self::Bool => "bool",
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct MeetingSchemaField {
    pub field: MeetingField,
    pub name: &'static str,
    pub kind: MeetingFieldKind,
    /// Whether the engine aggregates value counts over this field
    pub facet: bool,
}

macro_rules! schema_field {
    ($field:ident, $name:literal, $kind:ident, $facet:literal) => {
        MeetingSchemaField {
            field: MeetingField::$field,
            name: $name,
            kind: MeetingFieldKind::$kind,
            facet: $facet,
        }
    };
}

pub static MEETING_SCHEMA: [MeetingSchemaField; 18] = [
    schema_field!(Id, "id", String, false),
    schema_field!(Body, "body", String, true),
    schema_field!(MeetingDt, "meeting_dt", Float, true),
    schema_field!(Address, "address", String, false),
    schema_field!(FilingDt, "filing_dt", Float, true),
    schema_field!(IsEmergency, "is_emergency", Bool, true),
    schema_field!(IsAnnualCalendar, "is_annual_calendar", Bool, false),
    schema_field!(IsPrivateNotice, "is_private_notice", Bool, false),
    schema_field!(IsCancelled, "is_cancelled", Bool, false),
    schema_field!(CancelledDt, "cancelled_dt", Float, false),
    schema_field!(CancelledReason, "cancelled_reason", String, false),
    schema_field!(LatestAgenda, "latestAgenda", String, false),
    schema_field!(LatestAgendaLink, "latestAgendaLink", String, false),
    schema_field!(LatestMinutes, "latestMinutes", String, false),
    schema_field!(LatestMinutesLink, "latestMinutesLink", String, false),
    schema_field!(ContactPerson, "contactPerson", String, true),
    schema_field!(ContactEmail, "contactEmail", String, false),
    schema_field!(ContactPhone, "contactPhone", String, false),
];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown meeting field '{field_name}'")]
pub struct UnknownFieldError {
    pub field_name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
