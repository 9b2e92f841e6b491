// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read and write the iCalendar `RDATE` (recurrence dates) property value in
//! its plain-text (RFC 5545), xCal (RFC 6321) and jCal (RFC 7265) encodings.
//!
//! The entry point is [`RecurrenceDatesCodec`]; it negotiates the `VALUE`
//! parameter, skips malformed sub-values with a warning and delegates the
//! lexical work to a [`DateTimeCodec`] and a [`DurationCodec`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool,
    clippy::module_name_repetitions
)]

mod codec;
mod config;
mod error;
pub mod jcal;
pub mod keyword;
mod lexer;
pub mod parameter;
mod property;
pub mod value;
mod warning;
pub mod xml;

pub use crate::codec::RecurrenceDatesCodec;
pub use crate::config::CodecOptions;
pub use crate::error::{CodecError, ParameterError, ValueError};
pub use crate::jcal::JCalValue;
pub use crate::lexer::split_list;
pub use crate::parameter::{
    AlarmTriggerRelationship, CalendarUserType, FreeBusyType, ParameterKind, Parameters,
    ParticipationRole, ParticipationStatus, RecurrenceIdRange, RelationshipType, ValueType,
};
pub use crate::property::{DateList, RecurrenceDates};
pub use crate::value::{
    DateTimeCodec, Duration, DurationCodec, InstantOrDate, Period, PeriodEnd, Rfc5545,
};
pub use crate::warning::Warnings;
pub use crate::xml::XmlElement;
