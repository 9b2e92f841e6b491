// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type as defined in RFC 5545 Section 3.3.6.

use std::fmt;
use std::str::FromStr;

use chumsky::extra::ParserExtra;
use chumsky::input::{Input, Stream};
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::error::ValueError;
use crate::value::ValueExpected;

/// Signed duration defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl Duration {
    /// Whether the duration is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        match self {
            Self::DateTime { positive, .. } | Self::Week { positive, .. } => *positive,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        match self {
            Self::Week { week, .. } => write!(f, "{week}W"),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                // Only include components that are non-zero
                if *day > 0 {
                    write!(f, "{day}D")?;
                }
                let has_time = *hour > 0 || *minute > 0 || *second > 0;
                if has_time {
                    write!(f, "T")?;
                }
                if *hour > 0 {
                    write!(f, "{hour}H")?;
                }
                if *minute > 0 {
                    write!(f, "{minute}M")?;
                }
                if *second > 0 {
                    write!(f, "{second}S")?;
                }
                if !has_time && *day == 0 {
                    write!(f, "T0S")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Duration {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        value_duration::<'_, _, extra::Err<Rich<'_, char>>>()
            .parse(Stream::from_iter(s.chars()))
            .into_result()
            .map_err(|_| ValueError::Duration(s.to_owned()))
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub(crate) fn value_duration<'src, I, E>() -> impl Parser<'src, I, Duration, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // case-sensitive
    let int = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map_with(|str, e| match lexical::parse::<u32, _>(&str) {
            Ok(v) => Ok(v),
            Err(_) => Err(E::Error::expected_found([ValueExpected::U32], None, e.span())),
        });

    let week = int.then_ignore(just('W'));

    let second_val = int.then_ignore(just('S'));
    let minute_val = int.then_ignore(just('M'));
    let hour_val = int.then_ignore(just('H'));

    // dur-second = 1*DIGIT "S"
    let second_only = second_val.map(|s| (0, 0, s));

    // dur-minute = 1*DIGIT "M" [dur-second]
    let minute_with_second = minute_val
        .then(second_val.or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));

    // dur-hour = 1*DIGIT "H" [dur-minute]
    let hour_with_minute = hour_val
        .then(minute_val.then(second_val.or_not()).or_not())
        .map(|(h, opt_ms)| match opt_ms {
            Some((m, opt_s)) => (h, m, opt_s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    // dur-time = "T" (dur-hour / dur-minute / dur-second)
    let time = just('T').ignore_then(choice((hour_with_minute, minute_with_second, second_only)));

    let day = int.then_ignore(just('D'));
    let date = day.then(time.or_not());

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));
    let prefix = sign.then_ignore(just('P'));
    choice((
        prefix.then(date).map(|(positive, (day, time))| {
            let (hour, minute, second) = time.unwrap_or((0, 0, 0));
            Duration::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            }
        }),
        prefix
            .then(time)
            .map(|(positive, (hour, minute, second))| Duration::DateTime {
                positive,
                day: 0,
                hour,
                minute,
                second,
            }),
        prefix
            .then(week)
            .map(|(positive, week)| Duration::Week { positive, week }),
    ))
}
