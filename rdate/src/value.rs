// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporal values held by a recurrence-dates property, and the lexical
//! collaborators that read and write them.

mod datetime;
mod duration;
mod period;
mod rfc5545;

use std::borrow::Cow;

use chumsky::error::RichPattern;

use crate::error::ValueError;

pub use crate::value::datetime::InstantOrDate;
pub use crate::value::duration::Duration;
pub use crate::value::period::{Period, PeriodEnd};
pub use crate::value::rfc5545::Rfc5545;

/// Failure reasons when a specific value type was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// A date value was expected
    Date,
    /// A time value was expected
    Time,
    /// A 32-bit unsigned integer value was expected
    U32,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::Date => Self::Label(Cow::Borrowed("invalid date")),
            ValueExpected::Time => Self::Label(Cow::Borrowed("invalid time")),
            ValueExpected::U32 => Self::Label(Cow::Borrowed("u32 out of range")),
        }
    }
}

/// Lexer and formatter for date and date-time values.
pub trait DateTimeCodec {
    /// Parse a date or date-time in basic or extended form.
    ///
    /// `tzid` names the zone used for date-only and floating values.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a date or date-time, or does not
    /// exist in its zone.
    fn parse_date_time(&self, value: &str, tzid: Option<&str>)
    -> Result<InstantOrDate, ValueError>;

    /// Format a value as a date (`has_time = false`) or a date-time, in basic
    /// (`20200115T090000Z`) or extended (`2020-01-15T09:00:00Z`) form.
    fn format_date_time(&self, value: &InstantOrDate, has_time: bool, extended: bool) -> String;
}

/// Parser for duration values.
pub trait DurationCodec {
    /// Parse an RFC 5545 duration such as `PT1H30M`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a duration.
    fn parse_duration(&self, value: &str) -> Result<Duration, ValueError>;

    /// Canonical string of a duration.
    fn format_duration(&self, value: &Duration) -> String {
        value.to_string()
    }
}
