// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::value::{InstantOrDate, Period};

/// Recurrence Date-Times property (RFC 5545 Section 3.8.5.2).
///
/// Holds either dates/date-times or periods, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceDates {
    /// Dates or date-times sharing one time-of-day bit
    Dates(DateList),
    /// Periods of time
    Periods(Vec<Period>),
}

impl Default for RecurrenceDates {
    fn default() -> Self {
        Self::Dates(DateList::default())
    }
}

impl RecurrenceDates {
    /// Number of dates or periods.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Dates(dates) => dates.len(),
            Self::Periods(periods) => periods.len(),
        }
    }

    /// Whether there are no dates or periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The date list, if this holds dates.
    #[must_use]
    pub const fn dates(&self) -> Option<&DateList> {
        match self {
            Self::Dates(dates) => Some(dates),
            Self::Periods(_) => None,
        }
    }

    /// The periods, if this holds periods.
    #[must_use]
    pub fn periods(&self) -> Option<&[Period]> {
        match self {
            Self::Dates(_) => None,
            Self::Periods(periods) => Some(periods),
        }
    }
}

impl From<DateList> for RecurrenceDates {
    fn from(dates: DateList) -> Self {
        Self::Dates(dates)
    }
}

impl From<Vec<Period>> for RecurrenceDates {
    fn from(periods: Vec<Period>) -> Self {
        Self::Periods(periods)
    }
}

/// Dates or date-times with a single, list-wide `has_time` bit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateList {
    values: Vec<InstantOrDate>,
    has_time: bool,
}

impl DateList {
    /// Create a list; every value takes the list's `has_time`.
    #[must_use]
    pub fn new(values: Vec<InstantOrDate>, has_time: bool) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.with_has_time(has_time))
            .collect();
        Self { values, has_time }
    }

    /// The values, in order.
    #[must_use]
    pub fn values(&self) -> &[InstantOrDate] {
        &self.values
    }

    /// Whether the values carry a time of day.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.has_time
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the list, returning the values.
    #[must_use]
    pub fn into_values(self) -> Vec<InstantOrDate> {
        self.values
    }
}
