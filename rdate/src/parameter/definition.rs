// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;
use crate::keyword::{
    KW_BINARY, KW_BOOLEAN, KW_CAL_ADDRESS, KW_CUTYPE_GROUP, KW_CUTYPE_INDIVIDUAL,
    KW_CUTYPE_RESOURCE, KW_CUTYPE_ROOM, KW_CUTYPE_UNKNOWN, KW_DATE, KW_DATETIME, KW_DURATION,
    KW_FBTYPE_BUSY, KW_FBTYPE_BUSY_TENTATIVE, KW_FBTYPE_BUSY_UNAVAILABLE, KW_FBTYPE_FREE,
    KW_FLOAT, KW_INTEGER, KW_PARTSTAT_ACCEPTED, KW_PARTSTAT_COMPLETED, KW_PARTSTAT_DECLINED,
    KW_PARTSTAT_DELEGATED, KW_PARTSTAT_IN_PROCESS, KW_PARTSTAT_NEEDS_ACTION,
    KW_PARTSTAT_TENTATIVE, KW_PERIOD, KW_RANGE_THISANDFUTURE, KW_RECUR, KW_RELATED_END,
    KW_RELATED_START, KW_RELTYPE_CHILD, KW_RELTYPE_PARENT, KW_RELTYPE_SIBLING, KW_ROLE_CHAIR,
    KW_ROLE_NON_PARTICIPANT, KW_ROLE_OPT_PARTICIPANT, KW_ROLE_REQ_PARTICIPANT, KW_RSVP,
    KW_RSVP_FALSE, KW_RSVP_TRUE, KW_TEXT, KW_TIME, KW_URI, KW_UTC_OFFSET,
};

/// Parse an RSVP expectation value.
///
/// # Errors
///
/// Returns an error if the value is not `TRUE` or `FALSE` (case-insensitive).
pub fn parse_rsvp(value: &str) -> Result<bool, ParameterError> {
    if value.eq_ignore_ascii_case(KW_RSVP_TRUE) {
        Ok(true)
    } else if value.eq_ignore_ascii_case(KW_RSVP_FALSE) {
        Ok(false)
    } else {
        Err(ParameterError::InvalidValue {
            parameter: KW_RSVP.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Macro to define parameter enums without x-name/iana-token support.
///
/// Values outside the enumeration are rejected.
macro_rules! define_param_enum {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[allow(missing_docs)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
        }

        impl FromStr for $Name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$Variant);
                    }
                )*
                Err(())
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$Variant => $kw.fmt(f),
                    )*
                }
            }
        }
    };
}

/// Macro to define parameter enums with x-name and unrecognized value support.
///
/// Every string converts; values outside the enumeration are kept verbatim.
macro_rules! define_param_enum_with_unknown {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[allow(missing_docs)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
            /// Custom experimental x-name value (must start with "X-" or "x-")
            XName(String),
            /// Unrecognized value (not a known standard value)
            Unrecognized(String),
        }

        impl From<&str> for $Name {
            fn from(s: &str) -> Self {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Self::$Variant;
                    }
                )*

                if s.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("X-")) {
                    Self::XName(s.to_owned())
                } else {
                    Self::Unrecognized(s.to_owned())
                }
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$Variant => $kw.fmt(f),
                    )*
                    Self::XName(s) | Self::Unrecognized(s) => s.fmt(f),
                }
            }
        }

        impl $Name {
            /// Whether the value is a standard value or an x-name.
            #[must_use]
            pub const fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }
    };
}

define_param_enum_with_unknown! {
    /// To identify the type of calendar user specified by the property.
    #[derive(Default)]
    enum CalendarUserType {
        /// An individual
        #[default]
        Individual => KW_CUTYPE_INDIVIDUAL,
        /// A group of individuals
        Group      => KW_CUTYPE_GROUP,
        /// A physical resource
        Resource   => KW_CUTYPE_RESOURCE,
        /// A room resource
        Room       => KW_CUTYPE_ROOM,
        /// Otherwise not known
        Unknown    => KW_CUTYPE_UNKNOWN,
    }
}

define_param_enum_with_unknown! {
    /// This parameter defines the free or busy time type for a time
    #[derive(Default)]
    enum FreeBusyType {
        /// The time interval is free for scheduling
        #[default]
        Free             => KW_FBTYPE_FREE,
        /// The time interval is busy because one or more events have been
        /// scheduled for that interval
        Busy             => KW_FBTYPE_BUSY,
        /// The time interval is busy and that the interval can not be scheduled.
        BusyUnavailable  => KW_FBTYPE_BUSY_UNAVAILABLE,
        /// The time interval is busy because one or more events have been
        /// tentatively scheduled for that interval.
        BusyTentative    => KW_FBTYPE_BUSY_TENTATIVE,
    }
}

define_param_enum_with_unknown! {
    /// Participation status for the calendar user.
    enum ParticipationStatus {
        NeedsAction  => KW_PARTSTAT_NEEDS_ACTION,
        Accepted     => KW_PARTSTAT_ACCEPTED,
        Declined     => KW_PARTSTAT_DECLINED,
        Tentative    => KW_PARTSTAT_TENTATIVE,
        Delegated    => KW_PARTSTAT_DELEGATED,
        Completed    => KW_PARTSTAT_COMPLETED,
        InProcess    => KW_PARTSTAT_IN_PROCESS,
    }
}

define_param_enum! {
    /// Effective range of recurrence instances from the instance specified by
    /// the recurrence identifier.
    enum RecurrenceIdRange {
        /// A range defined by the recurrence identifier and all subsequent
        /// instances
        ThisAndFuture => KW_RANGE_THISANDFUTURE,

        // The value "THISANDPRIOR" is deprecated by this revision of iCalendar
        // and MUST NOT be generated by applications.
    }
}

define_param_enum! {
    /// This parameter defines the relationship of the alarm trigger to the
    /// start or end of the calendar component.
    #[derive(Default)]
    enum AlarmTriggerRelationship {
        /// The parameter value START will set the alarm to trigger off the
        /// start of the calendar component;
        #[default]
        Start => KW_RELATED_START,
        /// the parameter value END will set the alarm to trigger off the end
        /// of the calendar component.
        End   => KW_RELATED_END,
    }
}

define_param_enum_with_unknown! {
    /// Hierarchical relationship type of the calendar component referenced by
    /// the property.
    #[derive(Default)]
    enum RelationshipType {
        /// The referenced calendar component is a superior of calendar component
        #[default]
        Parent  => KW_RELTYPE_PARENT,
        /// The referenced calendar component is a subordinate of the calendar
        /// component
        Child   => KW_RELTYPE_CHILD,
        /// The referenced calendar component is a peer of the calendar component
        Sibling => KW_RELTYPE_SIBLING,
    }
}

define_param_enum_with_unknown! {
    /// Participation role for the calendar user.
    #[derive(Default)]
    enum ParticipationRole {
        Chair             => KW_ROLE_CHAIR,
        #[default]
        ReqParticipant    => KW_ROLE_REQ_PARTICIPANT,
        OptParticipant    => KW_ROLE_OPT_PARTICIPANT,
        NonParticipant    => KW_ROLE_NON_PARTICIPANT,
    }
}

define_param_enum_with_unknown! {
    /// Value type of a property, carried by the `VALUE` parameter.
    enum ValueType {
        Binary              => KW_BINARY,
        Boolean             => KW_BOOLEAN,
        CalendarUserAddress => KW_CAL_ADDRESS,
        Date                => KW_DATE,
        DateTime            => KW_DATETIME,
        Duration            => KW_DURATION,
        Float               => KW_FLOAT,
        Integer             => KW_INTEGER,
        Period              => KW_PERIOD,
        RecurrenceRule      => KW_RECUR,
        Text                => KW_TEXT,
        Time                => KW_TIME,
        Uri                 => KW_URI,
        UtcOffset           => KW_UTC_OFFSET,
    }
}
