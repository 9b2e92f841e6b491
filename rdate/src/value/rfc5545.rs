// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chumsky::input::Stream;
use chumsky::prelude::*;
use jiff::tz::{Offset, TimeZone};

use crate::config::CodecOptions;
use crate::error::ValueError;
use crate::value::datetime::{LexicalZone, value_instant};
use crate::value::{DateTimeCodec, Duration, DurationCodec, InstantOrDate};

/// Default date-time and duration collaborator, following RFC 5545 for the
/// basic form and RFC 6321 for the extended form.
///
/// Date-only and floating values are placed in the zone named by the `TZID`
/// parameter, or in the default zone when there is none. Date-times are
/// written in UTC.
#[derive(Debug, Clone)]
pub struct Rfc5545 {
    default_tz: TimeZone,
}

impl Default for Rfc5545 {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}

impl Rfc5545 {
    /// Create a collaborator with the given default zone.
    #[must_use]
    pub const fn new(default_tz: TimeZone) -> Self {
        Self { default_tz }
    }

    /// Create a collaborator from codec options.
    ///
    /// An unknown `default_tzid` falls back to UTC.
    #[must_use]
    pub fn from_options(options: &CodecOptions) -> Self {
        let default_tz = match options.default_tzid.as_deref() {
            Some(tzid) => TimeZone::get(tzid).unwrap_or_else(|err| {
                tracing::warn!(tzid, %err, "unknown default time zone, using UTC");
                TimeZone::UTC
            }),
            None => TimeZone::UTC,
        };
        Self::new(default_tz)
    }

    /// The zone used when no `TZID` is given.
    #[must_use]
    pub const fn default_tz(&self) -> &TimeZone {
        &self.default_tz
    }

    fn resolve_tz(&self, tzid: Option<&str>) -> TimeZone {
        match tzid {
            Some(tzid) => TimeZone::get(tzid).unwrap_or_else(|err| {
                tracing::warn!(tzid, %err, "unknown time zone identifier, using default zone");
                self.default_tz.clone()
            }),
            None => self.default_tz.clone(),
        }
    }
}

impl DateTimeCodec for Rfc5545 {
    fn parse_date_time(
        &self,
        value: &str,
        tzid: Option<&str>,
    ) -> Result<InstantOrDate, ValueError> {
        let lexeme = value_instant::<'_, _, extra::Err<Rich<'_, char>>>()
            .parse(Stream::from_iter(value.chars()))
            .into_result()
            .map_err(|_| ValueError::DateTime(value.to_owned()))?;

        let out_of_range = |_| ValueError::OutOfRange(value.to_owned());
        let tz = match lexeme.zone {
            LexicalZone::Floating => self.resolve_tz(tzid),
            LexicalZone::Utc => TimeZone::UTC,
            LexicalZone::Offset(seconds) => {
                TimeZone::fixed(Offset::from_seconds(seconds).map_err(out_of_range)?)
            }
        };

        match lexeme.time {
            Some(time) => {
                let zoned = lexeme.date.to_datetime(time).to_zoned(tz);
                Ok(InstantOrDate::date_time(zoned.map_err(out_of_range)?))
            }
            None => {
                let zoned = lexeme.date.to_zoned(tz);
                Ok(InstantOrDate::date(zoned.map_err(out_of_range)?))
            }
        }
    }

    fn format_date_time(&self, value: &InstantOrDate, has_time: bool, extended: bool) -> String {
        if has_time {
            let dt = value.zoned().with_time_zone(TimeZone::UTC).datetime();
            let (y, mo, d) = (dt.year(), dt.month(), dt.day());
            let (h, mi, s) = (dt.hour(), dt.minute(), dt.second());
            if extended {
                format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}Z")
            } else {
                format!("{y:04}{mo:02}{d:02}T{h:02}{mi:02}{s:02}Z")
            }
        } else {
            let date = value.zoned().date();
            let (y, mo, d) = (date.year(), date.month(), date.day());
            if extended {
                format!("{y:04}-{mo:02}-{d:02}")
            } else {
                format!("{y:04}{mo:02}{d:02}")
            }
        }
    }
}

impl DurationCodec for Rfc5545 {
    fn parse_duration(&self, value: &str) -> Result<Duration, ValueError> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn places_values_in_zones() {
        let codec = Rfc5545::default();

        let utc = codec.parse_date_time("20200115T090000Z", None).unwrap();
        assert!(utc.has_time());
        assert_eq!(utc.timestamp(), "2020-01-15T09:00:00Z".parse::<jiff::Timestamp>().unwrap());

        let offset = codec.parse_date_time("20200115T100000+0100", None).unwrap();
        assert_eq!(offset, utc);

        let floating = codec
            .parse_date_time("20200115T100000", Some("Europe/Paris"))
            .unwrap();
        assert_eq!(floating, utc);

        let day = codec
            .parse_date_time("2020-01-16", Some("America/New_York"))
            .unwrap();
        assert!(!day.has_time());
        assert_eq!(day.zoned().date(), date(2020, 1, 16));
        assert_eq!(day.timestamp(), "2020-01-16T05:00:00Z".parse::<jiff::Timestamp>().unwrap());
    }

    #[test]
    fn falls_back_to_default_zone() {
        let codec = Rfc5545::new(TimeZone::get("Asia/Shanghai").unwrap());

        let unknown = codec
            .parse_date_time("20200115T170000", Some("Not/AZone"))
            .unwrap();
        let absent = codec.parse_date_time("20200115T170000", None).unwrap();
        assert_eq!(unknown, absent);
        assert_eq!(absent.timestamp(), "2020-01-15T09:00:00Z".parse::<jiff::Timestamp>().unwrap());

        let options = CodecOptions::default().default_tzid("Not/AZone");
        let codec = Rfc5545::from_options(&options);
        assert_eq!(codec.default_tz(), &TimeZone::UTC);
    }

    #[test]
    fn rejects_invalid_values() {
        let codec = Rfc5545::default();
        let fail_cases = ["", "not-a-date", "20200230", "PT1H", "20200115T240000Z"];
        for src in fail_cases {
            assert!(
                codec.parse_date_time(src, None).is_err(),
                "Parse {src} should fail"
            );
        }
    }

    #[test]
    fn formats_values() {
        let codec = Rfc5545::default();

        let dt = codec
            .parse_date_time("2020-01-15T10:00:00+01:00", None)
            .unwrap();
        assert_eq!(codec.format_date_time(&dt, true, false), "20200115T090000Z");
        assert_eq!(
            codec.format_date_time(&dt, true, true),
            "2020-01-15T09:00:00Z"
        );

        let day = codec
            .parse_date_time("20200116", Some("America/New_York"))
            .unwrap();
        assert_eq!(codec.format_date_time(&day, false, false), "20200116");
        assert_eq!(codec.format_date_time(&day, false, true), "2020-01-16");

        let leap = codec.parse_date_time("19970630T235960Z", None).unwrap();
        assert_eq!(
            codec.format_date_time(&leap, true, false),
            "19970630T235959Z"
        );
    }
}
