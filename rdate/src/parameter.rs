// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.

mod definition;
mod kind;

use crate::error::ParameterError;
use crate::keyword::{
    KW_RSVP, KW_RSVP_FALSE, KW_RSVP_TRUE, KW_TZID, KW_VALUE, XCAL_PARAMETERS, XCAL_TEXT,
};
use crate::xml::XmlElement;

pub use crate::parameter::definition::{
    AlarmTriggerRelationship, CalendarUserType, FreeBusyType, ParticipationRole,
    ParticipationStatus, RecurrenceIdRange, RelationshipType, ValueType, parse_rsvp,
};
pub use crate::parameter::kind::ParameterKind;

/// Case-insensitive multimap of property parameters.
///
/// Names are upper-cased on insertion and lookup. The order of names and the
/// order of values under each name are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, Vec<String>)>,
}

impl Parameters {
    /// Create an empty parameter bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`.
    pub fn put(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(name) {
            Some(i) => {
                if let Some((_, values)) = self.entries.get_mut(i) {
                    values.push(value);
                }
            }
            None => self.entries.push((name.to_ascii_uppercase(), vec![value])),
        }
    }

    /// Replace all values under `name` with `value`, returning the old ones.
    pub fn replace(&mut self, name: &str, value: impl Into<String>) -> Vec<String> {
        let old = self.remove(name);
        self.put(name, value);
        old
    }

    /// First value under `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).first().map(String::as_str)
    }

    /// All values under `name`, empty if there are none.
    #[must_use]
    pub fn get(&self, name: &str) -> &[String] {
        self.position(name)
            .and_then(|i| self.entries.get(i))
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Remove `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Vec<String> {
        match self.position(name) {
            Some(i) => self.entries.remove(i).1,
            None => Vec::new(),
        }
    }

    /// Whether there is at least one value under `name`.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Whether the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over names (upper-cased) and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// The `VALUE` parameter.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.first(KW_VALUE).map(ValueType::from)
    }

    /// Set or clear the `VALUE` parameter.
    pub fn set_value_type(&mut self, value_type: Option<&ValueType>) {
        match value_type {
            Some(v) => {
                self.replace(KW_VALUE, v.to_string());
            }
            None => {
                self.remove(KW_VALUE);
            }
        }
    }

    /// The `TZID` parameter.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.first(KW_TZID)
    }

    /// Set or clear the `TZID` parameter.
    pub fn set_tzid(&mut self, tzid: Option<&str>) {
        match tzid {
            Some(tzid) => {
                self.replace(KW_TZID, tzid);
            }
            None => {
                self.remove(KW_TZID);
            }
        }
    }

    /// The `RSVP` parameter: `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is present but neither `TRUE` nor `FALSE`.
    pub fn rsvp(&self) -> Result<Option<bool>, ParameterError> {
        self.first(KW_RSVP).map(parse_rsvp).transpose()
    }

    /// Set or clear the `RSVP` parameter.
    pub fn set_rsvp(&mut self, rsvp: Option<bool>) {
        match rsvp {
            Some(rsvp) => {
                self.replace(KW_RSVP, if rsvp { KW_RSVP_TRUE } else { KW_RSVP_FALSE });
            }
            None => {
                self.remove(KW_RSVP);
            }
        }
    }

    /// Check enumerated parameters, returning one warning per value that is
    /// not a member of its enumeration.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, values) in self.iter() {
            let Ok(kind) = name.parse::<ParameterKind>() else {
                continue;
            };
            for value in values {
                let valid = match kind {
                    ParameterKind::CalendarUserType => {
                        CalendarUserType::from(value.as_str()).is_recognized()
                    }
                    ParameterKind::FreeBusyType => FreeBusyType::from(value.as_str()).is_recognized(),
                    ParameterKind::ParticipationStatus => {
                        ParticipationStatus::from(value.as_str()).is_recognized()
                    }
                    ParameterKind::RecurrenceIdRange => value.parse::<RecurrenceIdRange>().is_ok(),
                    ParameterKind::AlarmTriggerRelationship => {
                        value.parse::<AlarmTriggerRelationship>().is_ok()
                    }
                    ParameterKind::RelationshipType => {
                        RelationshipType::from(value.as_str()).is_recognized()
                    }
                    ParameterKind::ParticipationRole => {
                        ParticipationRole::from(value.as_str()).is_recognized()
                    }
                    ParameterKind::ValueType => ValueType::from(value.as_str()).is_recognized(),
                    ParameterKind::RsvpExpectation => parse_rsvp(value).is_ok(),
                    _ => true,
                };
                if !valid {
                    warnings.push(format!("Invalid value for parameter {kind}: {value}"));
                }
            }
        }
        warnings
    }

    /// Read the xCal `<parameters>` child of a property element.
    ///
    /// ```xml
    /// <parameters><tzid><text>America/New_York</text></tzid></parameters>
    /// ```
    #[must_use]
    pub fn from_xcal(property: &XmlElement) -> Self {
        let mut parameters = Self::new();
        for block in property.children(XCAL_PARAMETERS) {
            for param in block.elements() {
                for value in param.elements() {
                    parameters.put(param.name(), value.text());
                }
            }
        }
        parameters
    }

    /// Write a `<parameters>` child into a property element. Nothing is
    /// written for an empty bag. `VALUE` is skipped: xCal carries the value
    /// type in the element names.
    pub fn write_xcal(&self, property: &mut XmlElement) {
        let mut params = self.iter().filter(|(name, _)| *name != KW_VALUE).peekable();
        if params.peek().is_none() {
            return;
        }

        let mut block = XmlElement::new(XCAL_PARAMETERS);
        for (name, values) in params {
            let mut param = XmlElement::new(name.to_ascii_lowercase());
            for value in values {
                param.append(XCAL_TEXT, value);
            }
            block.append_element(param);
        }
        property.append_element(block);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_case_insensitive() {
        let mut params = Parameters::new();
        params.put("NUMBERS", "1");
        params.put("numbers", "2");
        params.put("Other", "x");

        assert_eq!(params.first("numbers"), Some("1"));
        assert_eq!(params.get("Numbers"), ["1", "2"]);
        assert_eq!(params.len(), 2);
        assert!(params.contains_key("OTHER"));

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["NUMBERS", "OTHER"]);

        assert_eq!(params.replace("numbers", "3"), ["1", "2"]);
        assert_eq!(params.get("NUMBERS"), ["3"]);
        assert_eq!(params.remove("other"), ["x"]);
        assert!(params.get("other").is_empty());
        assert_eq!(params.first("missing"), None);
    }

    #[test]
    fn reads_and_writes_rsvp() {
        let mut params = Parameters::new();
        assert_eq!(params.rsvp(), Ok(None));

        params.set_rsvp(Some(true));
        assert_eq!(params.rsvp(), Ok(Some(true)));
        assert_eq!(params.first("RSVP"), Some("TRUE"));

        params.set_rsvp(Some(false));
        assert_eq!(params.rsvp(), Ok(Some(false)));

        params.set_rsvp(None);
        assert_eq!(params.rsvp(), Ok(None));

        params.put("rsvp", "true");
        assert_eq!(params.rsvp(), Ok(Some(true)));
    }

    #[test]
    fn rejects_malformed_rsvp() {
        let mut params = Parameters::new();
        params.put(KW_RSVP, "foo");
        assert!(params.rsvp().is_err());
    }

    #[test]
    fn validates_rsvp() {
        let mut params = Parameters::new();
        assert!(params.validate().is_empty());

        params.put(KW_RSVP, "foo");
        assert_eq!(params.validate().len(), 1);

        for value in ["true", "false", "TRUE", "FALSE"] {
            params.replace(KW_RSVP, value);
            assert!(params.validate().is_empty(), "RSVP={value} should be valid");
        }
    }

    #[test]
    fn validates_enumerated_parameters() {
        let names = [
            "CUTYPE", "FBTYPE", "PARTSTAT", "RANGE", "RELATED", "RELTYPE", "ROLE", "VALUE",
        ];

        let mut params = Parameters::new();
        for name in names {
            params.put(name, "foo");
        }
        assert_eq!(params.validate().len(), names.len());

        #[rustfmt::skip]
        let valid = [
            ("CUTYPE",   "GROUP"),
            ("FBTYPE",   "BUSY"),
            ("PARTSTAT", "ACCEPTED"),
            ("RANGE",    "THISANDFUTURE"),
            ("RELATED",  "END"),
            ("RELTYPE",  "CHILD"),
            ("ROLE",     "CHAIR"),
            ("VALUE",    "BINARY"),
        ];
        for (name, value) in valid {
            params.replace(name, value);
        }
        assert!(params.validate().is_empty());

        params.replace("ROLE", "X-OBSERVER");
        assert!(params.validate().is_empty());
        params.replace("RANGE", "X-PRIOR");
        assert_eq!(params.validate(), ["Invalid value for parameter RANGE: X-PRIOR"]);
    }

    #[test]
    fn typed_accessors() {
        let mut params = Parameters::new();
        assert_eq!(params.value_type(), None);
        assert_eq!(params.tzid(), None);

        params.set_value_type(Some(&ValueType::Period));
        params.set_tzid(Some("Europe/Paris"));
        assert_eq!(params.value_type(), Some(ValueType::Period));
        assert_eq!(params.first("value"), Some("PERIOD"));
        assert_eq!(params.tzid(), Some("Europe/Paris"));

        params.set_value_type(None);
        params.set_tzid(None);
        assert!(params.is_empty());
    }

    #[test]
    fn round_trips_xcal_parameters() {
        let mut params = Parameters::new();
        params.set_tzid(Some("America/New_York"));
        params.set_value_type(Some(&ValueType::Date));

        let mut property = XmlElement::new("rdate");
        params.write_xcal(&mut property);
        assert_eq!(
            property
                .children(XCAL_PARAMETERS)
                .flat_map(|p| p.children("tzid"))
                .flat_map(|t| t.all(XCAL_TEXT))
                .collect::<Vec<_>>(),
            ["America/New_York"]
        );

        let read = Parameters::from_xcal(&property);
        assert_eq!(read.tzid(), Some("America/New_York"));
        assert_eq!(read.value_type(), None);

        let mut empty = XmlElement::new("rdate");
        Parameters::new().write_xcal(&mut empty);
        assert_eq!(empty.elements().count(), 0);
    }
}
