// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Lexical failure of a single date, date-time, duration or UTC offset.
///
/// The codec never returns this to its caller; it becomes a warning and the
/// offending sub-value is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Not a date or date-time in basic or extended form.
    #[error("invalid date-time value: {0}")]
    DateTime(String),

    /// Not an RFC 5545 duration.
    #[error("invalid duration value: {0}")]
    Duration(String),

    /// The civil value does not exist or cannot be placed in its zone.
    #[error("date-time out of range: {0}")]
    OutOfRange(String),
}

/// Caller-contract violation on a parameter bag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// A parameter carries a value outside its enumeration.
    #[error("invalid value for parameter {parameter}: {value}")]
    InvalidValue {
        /// Parameter name, upper-cased
        parameter: String,
        /// Offending value as stored in the bag
        value: String,
    },
}

/// Caller-contract violation on an outer container (XML document or jCal
/// array).
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// XML syntax error.
    #[error("XML error: {0}")]
    Xml(String),

    /// The XML document has no root element.
    #[error("XML document has no root element")]
    MissingRoot,

    /// A jCal property is not shaped as `[name, {params}, type, value...]`.
    #[error("malformed jCal property: {0}")]
    JCal(String),

    /// JSON syntax error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the serialised document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for CodecError {
    fn from(err: quick_xml::Error) -> Self {
        CodecError::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CodecError::Xml(format!("UTF-8 error: {err}"))
    }
}
