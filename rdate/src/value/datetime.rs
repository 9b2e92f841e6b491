// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and date-time values as defined in RFC 5545 Sections 3.3.4 and 3.3.5,
//! plus the extended lexical forms used by xCal.

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use jiff::Zoned;
use jiff::civil;

use crate::value::ValueExpected;

/// An absolute instant, or a calendar day anchored at local midnight.
///
/// Two values are equal when they denote the same instant and agree on
/// `has_time`; the zone they were read in is not compared.
#[derive(Debug, Clone)]
pub struct InstantOrDate {
    zoned: Zoned,
    has_time: bool,
}

impl InstantOrDate {
    /// Create a value from a zoned instant.
    #[must_use]
    pub const fn new(zoned: Zoned, has_time: bool) -> Self {
        Self { zoned, has_time }
    }

    /// A date-time value.
    #[must_use]
    pub const fn date_time(zoned: Zoned) -> Self {
        Self::new(zoned, true)
    }

    /// A date value; `zoned` should be midnight of the day in its zone.
    #[must_use]
    pub const fn date(zoned: Zoned) -> Self {
        Self::new(zoned, false)
    }

    /// The instant, in the zone it was read in.
    #[must_use]
    pub const fn zoned(&self) -> &Zoned {
        &self.zoned
    }

    /// The absolute instant.
    #[must_use]
    pub fn timestamp(&self) -> jiff::Timestamp {
        self.zoned.timestamp()
    }

    /// Whether the value carries a time of day.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.has_time
    }

    /// Same instant with the time-of-day bit replaced.
    #[must_use]
    pub fn with_has_time(self, has_time: bool) -> Self {
        Self { has_time, ..self }
    }
}

impl PartialEq for InstantOrDate {
    fn eq(&self, other: &Self) -> bool {
        self.has_time == other.has_time && self.zoned.timestamp() == other.zoned.timestamp()
    }
}

impl Eq for InstantOrDate {}

/// Zone designator found after a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexicalZone {
    /// No designator, local time
    Floating,
    /// Trailing `Z`
    Utc,
    /// Numeric offset in seconds east of UTC
    Offset(i32),
}

/// A date or date-time as written, before it is placed in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub date: civil::Date,
    pub time: Option<civil::Time>,
    pub zone: LexicalZone,
}

/// Date or date-time in basic (`19970714T133000Z`) or extended
/// (`1997-07-14T13:30:00Z`) form. The two forms are not mixed within a value.
pub(crate) fn value_instant<'src, I, E>() -> impl Parser<'src, I, Lexeme, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    choice((instant(false), instant(true)))
}

fn instant<'src, I, E>(extended: bool) -> impl Parser<'src, I, Lexeme, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date(extended)
        .then(
            just('T')
                .ignore_then(value_time(extended))
                .then(zone(extended))
                .or_not(),
        )
        .map(|(date, time)| match time {
            Some((time, zone)) => Lexeme {
                date,
                time: Some(time),
                zone,
            },
            None => Lexeme {
                date,
                time: None,
                zone: LexicalZone::Floating,
            },
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
///
/// The extended form separates the fields with `-`.
fn value_date<'src, I, E>(extended: bool) -> impl Parser<'src, I, civil::Date, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let year = i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d);

    let month = choice((
        just('0').ignore_then(i8_1_9()),
        just('1').ignore_then(i8_0_2()).map(|b| 10 + b),
    ));

    let day = choice((
        just('0').ignore_then(i8_1_9()),
        i8_1_2().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('3').ignore_then(i8_0_1()).map(|b| 30 + b),
    ));

    year.then_ignore(separator('-', extended))
        .then(month)
        .then_ignore(separator('-', extended))
        .then(day)
        .try_map(|((year, month), day), span| {
            civil::Date::new(year, month, day)
                .map_err(|_| E::Error::expected_found([ValueExpected::Date], None, span))
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// ;The "60" value is used to account for positive "leap" seconds.
/// ```
///
/// The extended form separates the fields with `:`.
fn value_time<'src, I, E>(extended: bool) -> impl Parser<'src, I, civil::Time, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    time_hour()
        .then_ignore(separator(':', extended))
        .then(time_minute())
        .then_ignore(separator(':', extended))
        .then(time_second())
        .try_map(|((hour, minute), second), span| {
            // NOTE: We contract leap second 60 to 59
            civil::Time::new(hour, minute, second.min(59), 0)
                .map_err(|_| E::Error::expected_found([ValueExpected::Time], None, span))
        })
}

/// ```txt
/// time-utc     = "Z"
/// time-numzone = ("+" / "-") time-hour time-minute
/// ```
fn zone<'src, I, E>(extended: bool) -> impl Parser<'src, I, LexicalZone, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    let offset = select! { c @ ('+' | '-') => c }
        .then(time_hour())
        .then_ignore(separator(':', extended))
        .then(time_minute())
        .map(|((sign, hour), minute)| {
            let seconds = i32::from(hour) * 3600 + i32::from(minute) * 60;
            LexicalZone::Offset(if sign == '-' { -seconds } else { seconds })
        });

    choice((just('Z').to(LexicalZone::Utc), offset))
        .or_not()
        .map(|zone| zone.unwrap_or(LexicalZone::Floating))
}

/// Matches `c` in the extended form and nothing in the basic form.
fn separator<'src, I, E>(c: char, extended: bool) -> impl Parser<'src, I, (), E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    just(c).repeated().exactly(usize::from(extended))
}

fn time_hour<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        i8_0_1().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(i8_0_3()).map(|b| 20 + b),
    ))
}

fn time_minute<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    i8_0_5().then(i8_0_9()).map(|(a, b)| 10 * a + b)
}

fn time_second<'src, I, E>() -> impl Parser<'src, I, i8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        i8_0_5().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('6').ignore_then(just('0').ignored().to(60)), // leap second
    ))
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        const fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
        {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(i8_0_1 : i8 => { '0', '1' });
define_digit_select!(i8_0_2 : i8 => { '0', '1', '2' });
define_digit_select!(i8_0_3 : i8 => { '0', '1', '2', '3' });
define_digit_select!(i8_0_5 : i8 => { '0', '1', '2', '3', '4', '5' });
define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_1_2 : i8 => { '1', '2' });
define_digit_select!(i8_1_9 : i8 => { '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });

#[cfg(test)]
mod tests {
    use chumsky::input::Stream;
    use jiff::civil::{date, time};

    use super::*;

    fn parse(src: &str) -> Result<Lexeme, Vec<Rich<'_, char>>> {
        let stream = Stream::from_iter(src.chars());
        value_instant::<'_, _, extra::Err<_>>()
            .parse(stream)
            .into_result()
    }

    #[test]
    fn parses_date() {
        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.4
            ("19970714",   date(1997, 7, 14)),
            // extra tests
            ("20000229",   date(2000, 2, 29)), // leap year
            ("2020-01-16", date(2020, 1, 16)),
        ];
        for (src, expected) in success_cases {
            let lexeme = parse(src).unwrap();
            assert_eq!(lexeme.date, expected, "Failed for {src}");
            assert_eq!(lexeme.time, None, "Failed for {src}");
            assert_eq!(lexeme.zone, LexicalZone::Floating, "Failed for {src}");
        }

        let fail_cases = [
            "20241301",   // invalid month
            "20240001",   // invalid month
            "19970230",   // invalid date
            "abcd1234",   // invalid characters
            "2024011",    // invalid length
            "202401011",  // invalid length
            "2020-0116",  // mixed forms
            "2020/01/16", // wrong separator
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_date_time() {
        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.5
            ("19980118T230000",           date(1998, 1, 18), time(23, 0, 0, 0),   LexicalZone::Floating),
            ("19980119T070000Z",          date(1998, 1, 19), time(7, 0, 0, 0),    LexicalZone::Utc),
            ("19970630T235960Z",          date(1997, 6, 30), time(23, 59, 59, 0), LexicalZone::Utc),
            // extra tests
            ("19980119T230000-0800",      date(1998, 1, 19), time(23, 0, 0, 0),   LexicalZone::Offset(-8 * 3600)),
            ("2020-01-15T09:00:00Z",      date(2020, 1, 15), time(9, 0, 0, 0),    LexicalZone::Utc),
            ("2020-01-15T09:00:00",       date(2020, 1, 15), time(9, 0, 0, 0),    LexicalZone::Floating),
            ("2020-01-15T09:00:00+05:30", date(2020, 1, 15), time(9, 0, 0, 0),    LexicalZone::Offset(5 * 3600 + 30 * 60)),
        ];
        for (src, expected_date, expected_time, expected_zone) in success_cases {
            let lexeme = parse(src).unwrap();
            assert_eq!(lexeme.date, expected_date, "Failed for {src}");
            assert_eq!(lexeme.time, Some(expected_time), "Failed for {src}");
            assert_eq!(lexeme.zone, expected_zone, "Failed for {src}");
        }

        let fail_cases = [
            "19970714 133000",      // missing 'T'
            "19970714T",            // missing time
            "19970714T250000",      // invalid hour
            "19970714T126000",      // invalid minute
            "19970714T123461",      // invalid second
            "2020-01-15T090000Z",   // mixed forms
            "20200115T09:00:00Z",   // mixed forms
            "20200115T090000ZZ",    // trailing garbage
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn compares_by_instant_and_precision() {
        let utc: Zoned = "2020-01-15T09:00:00+00:00[UTC]".parse().unwrap();
        let paris = utc.with_time_zone(jiff::tz::TimeZone::get("Europe/Paris").unwrap());

        assert_eq!(
            InstantOrDate::date_time(utc.clone()),
            InstantOrDate::date_time(paris)
        );
        assert_ne!(
            InstantOrDate::date_time(utc.clone()),
            InstantOrDate::date(utc.clone())
        );
        assert!(!InstantOrDate::date_time(utc).with_has_time(false).has_time());
    }
}
