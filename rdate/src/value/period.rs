// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period of time as defined in RFC 5545 Section 3.3.9.

use crate::value::{Duration, InstantOrDate};

/// How a period ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodEnd {
    /// Explicit end instant
    ///
    /// Format: `date-time "/" date-time`
    End(InstantOrDate),

    /// Length of the period
    ///
    /// Format: `date-time "/" dur-value`
    Duration(Duration),
}

/// Period of time: an optional start and an end or a duration.
///
/// The start is absent only for xCal periods read without a `<start>`
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    start: Option<InstantOrDate>,
    end: PeriodEnd,
}

impl Period {
    /// Create a period from its parts.
    #[must_use]
    pub const fn new(start: Option<InstantOrDate>, end: PeriodEnd) -> Self {
        Self { start, end }
    }

    /// Period with an explicit end.
    #[must_use]
    pub const fn with_end(start: InstantOrDate, end: InstantOrDate) -> Self {
        Self::new(Some(start), PeriodEnd::End(end))
    }

    /// Period with a duration.
    #[must_use]
    pub const fn with_duration(start: InstantOrDate, duration: Duration) -> Self {
        Self::new(Some(start), PeriodEnd::Duration(duration))
    }

    /// Start of the period, if known.
    #[must_use]
    pub const fn start(&self) -> Option<&InstantOrDate> {
        self.start.as_ref()
    }

    /// How the period ends.
    #[must_use]
    pub const fn ending(&self) -> &PeriodEnd {
        &self.end
    }

    /// End instant, if the period has one.
    #[must_use]
    pub const fn end(&self) -> Option<&InstantOrDate> {
        match &self.end {
            PeriodEnd::End(end) => Some(end),
            PeriodEnd::Duration(_) => None,
        }
    }

    /// Duration, if the period has one.
    #[must_use]
    pub const fn duration(&self) -> Option<&Duration> {
        match &self.end {
            PeriodEnd::End(_) => None,
            PeriodEnd::Duration(duration) => Some(duration),
        }
    }
}
