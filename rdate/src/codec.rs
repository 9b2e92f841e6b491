// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing `RDATE` values in plain text, xCal and jCal.
//!
//! Readers never fail on a malformed date, date-time, period or duration:
//! the sub-value is skipped and one message is pushed to the [`Warnings`]
//! sink. Only malformed outer containers (XML documents, jCal arrays) are
//! errors.

mod data_type;
mod json;
mod text;
mod xml;

use crate::config::CodecOptions;
use crate::parameter::ValueType;
use crate::property::{DateList, RecurrenceDates};
use crate::value::{DateTimeCodec, DurationCodec, Period, PeriodEnd, Rfc5545};
use crate::warning::Warnings;

const WARN_NO_END: &str = "No end date or duration found, skipping time period";
const WARN_START: &str = "Could not parse start date, skipping time period";
const WARN_END_OR_DURATION: &str =
    "Could not parse end date or duration value, skipping time period";
const WARN_END: &str = "Could not parse end date, skipping time period";
const WARN_DURATION: &str = "Could not parse duration, skipping time period";
const WARN_NO_START: &str = "No start date found, skipping time period";
const WARN_DATE: &str = "Skipping unparsable date";

/// Codec for the `RDATE` property value.
///
/// Generic over the collaborator that lexes and formats dates, date-times
/// and durations; [`Rfc5545`] by default.
#[derive(Debug, Clone)]
pub struct RecurrenceDatesCodec<C = Rfc5545> {
    options: CodecOptions,
    collaborator: C,
}

impl Default for RecurrenceDatesCodec {
    fn default() -> Self {
        Self::from_options(CodecOptions::default())
    }
}

impl RecurrenceDatesCodec {
    /// Create a codec with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the default collaborator configured from `options`.
    #[must_use]
    pub fn from_options(options: CodecOptions) -> Self {
        let collaborator = Rfc5545::from_options(&options);
        Self::with_collaborator(options, collaborator)
    }
}

impl<C> RecurrenceDatesCodec<C> {
    /// Create a codec with a custom collaborator.
    #[must_use]
    pub const fn with_collaborator(options: CodecOptions, collaborator: C) -> Self {
        Self {
            options,
            collaborator,
        }
    }

    /// The codec options.
    #[must_use]
    pub const fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// The date-time and duration collaborator.
    #[must_use]
    pub const fn collaborator(&self) -> &C {
        &self.collaborator
    }
}

impl<C: DateTimeCodec + DurationCodec> RecurrenceDatesCodec<C> {
    /// Basic-form strings shared by the text and JSON writers.
    fn write_values(&self, property: &RecurrenceDates) -> Vec<String> {
        match property {
            RecurrenceDates::Dates(dates) => dates
                .values()
                .iter()
                .map(|v| {
                    self.collaborator
                        .format_date_time(v, dates.has_time(), false)
                })
                .collect(),
            RecurrenceDates::Periods(periods) => {
                periods.iter().map(|p| self.write_period(p)).collect()
            }
        }
    }

    fn write_period(&self, period: &Period) -> String {
        let start = period
            .start()
            .map(|s| self.collaborator.format_date_time(s, s.has_time(), false))
            .unwrap_or_default();
        let ending = match period.ending() {
            PeriodEnd::End(end) => self.collaborator.format_date_time(end, end.has_time(), false),
            PeriodEnd::Duration(duration) => self.collaborator.format_duration(duration),
        };
        format!("{start}/{ending}")
    }

    /// Value-list core shared by the text and JSON readers.
    fn parse_values(
        &self,
        values: &[String],
        data_type: Option<&ValueType>,
        tzid: Option<&str>,
        warnings: &mut Warnings,
    ) -> RecurrenceDates {
        if let Some(ValueType::Period) = data_type {
            let periods = values
                .iter()
                .filter_map(|raw| self.parse_period(raw, tzid, warnings))
                .collect();
            return RecurrenceDates::Periods(periods);
        }

        let has_time = data_type.is_none_or(|t| *t == ValueType::DateTime);
        let dates = values
            .iter()
            .filter_map(|raw| match self.collaborator.parse_date_time(raw, tzid) {
                Ok(v) => Some(v),
                Err(err) => {
                    tracing::trace!(%err, "date parse failure");
                    warnings.push(format!("{WARN_DATE}: {raw}"));
                    None
                }
            })
            .collect();
        RecurrenceDates::Dates(DateList::new(dates, has_time))
    }

    fn parse_period(
        &self,
        raw: &str,
        tzid: Option<&str>,
        warnings: &mut Warnings,
    ) -> Option<Period> {
        // A trailing `/` leaves no end
        let Some((start, end)) = raw.split_once('/').filter(|(_, end)| !end.is_empty()) else {
            warnings.push(format!("{WARN_NO_END}: {raw}"));
            return None;
        };

        let Ok(start) = self.collaborator.parse_date_time(start, tzid) else {
            warnings.push(format!("{WARN_START}: {raw}"));
            return None;
        };

        // An end instant takes precedence over a duration
        if let Ok(end) = self.collaborator.parse_date_time(end, tzid) {
            return Some(Period::with_end(start, end));
        }
        if let Ok(duration) = self.collaborator.parse_duration(end) {
            return Some(Period::with_duration(start, duration));
        }

        warnings.push(format!("{WARN_END_OR_DURATION}: {raw}"));
        None
    }
}
