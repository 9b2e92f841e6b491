// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::codec::RecurrenceDatesCodec;
use crate::error::CodecError;
use crate::jcal::JCalValue;
use crate::keyword::KW_RDATE;
use crate::parameter::{Parameters, ValueType};
use crate::property::RecurrenceDates;
use crate::value::{DateTimeCodec, DurationCodec};
use crate::warning::Warnings;

impl<C: DateTimeCodec + DurationCodec> RecurrenceDatesCodec<C> {
    /// Write the declared type and values of a jCal property. The type is
    /// always named, `date-time` included.
    #[must_use]
    pub fn write_json(&self, property: &RecurrenceDates) -> JCalValue {
        let data_type = self.data_type(property).unwrap_or(ValueType::DateTime);
        tracing::debug!(%data_type, values = property.len(), "writing RDATE jCal");
        JCalValue::new(Some(data_type), self.write_values(property))
    }

    /// Read the values of a jCal property. A missing type means `DATE-TIME`.
    pub fn parse_json(
        &self,
        value: &JCalValue,
        parameters: &Parameters,
        warnings: &mut Warnings,
    ) -> RecurrenceDates {
        tracing::debug!(
            data_type = ?value.data_type,
            values = value.values.len(),
            "parsing RDATE jCal"
        );
        self.parse_values(
            &value.values,
            value.data_type.as_ref(),
            parameters.tzid(),
            warnings,
        )
    }

    /// Read a whole jCal property array, returning the property and its
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not a well-formed jCal property.
    pub fn parse_jcal_property(
        &self,
        property: &serde_json::Value,
        warnings: &mut Warnings,
    ) -> Result<(RecurrenceDates, Parameters), CodecError> {
        let (value, parameters) = JCalValue::from_property(property)?;
        let rdate = self.parse_json(&value, &parameters, warnings);
        Ok((rdate, parameters))
    }

    /// Write a whole jCal property array named `rdate`.
    #[must_use]
    pub fn write_jcal_property(
        &self,
        property: &RecurrenceDates,
        parameters: &Parameters,
    ) -> serde_json::Value {
        self.write_json(property).to_property(KW_RDATE, parameters)
    }
}
