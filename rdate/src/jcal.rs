// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! jCal (RFC 7265) property envelope:
//! `[name, {parameters}, type, value, value, ...]`.

use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::keyword::{JCAL_UNKNOWN, KW_VALUE};
use crate::parameter::{Parameters, ValueType};

/// Declared data type and string values of a jCal property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JCalValue {
    /// Declared data type; `None` when the property says `unknown`.
    pub data_type: Option<ValueType>,
    /// Values, each in the plain-text lexical form.
    pub values: Vec<String>,
}

impl JCalValue {
    /// Create a jCal value.
    #[must_use]
    pub const fn new(data_type: Option<ValueType>, values: Vec<String>) -> Self {
        Self { data_type, values }
    }

    /// Read a jCal property array, returning its value and parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the property is not an array of a name, a
    /// parameter object, a type string and string values.
    pub fn from_property(property: &Value) -> Result<(Self, Parameters), CodecError> {
        let Value::Array(items) = property else {
            return Err(CodecError::JCal(format!("expected an array, got {property}")));
        };
        let [name, params, data_type, values @ ..] = items.as_slice() else {
            return Err(CodecError::JCal(
                "expected name, parameters and type".to_owned(),
            ));
        };

        if !name.is_string() {
            return Err(CodecError::JCal(format!("property name is not a string: {name}")));
        }
        let parameters = read_parameters(params)?;
        let data_type = match data_type.as_str() {
            Some(t) if t.eq_ignore_ascii_case(JCAL_UNKNOWN) => None,
            Some(t) => Some(ValueType::from(t)),
            None => {
                return Err(CodecError::JCal(format!("type is not a string: {data_type}")));
            }
        };
        let values = values
            .iter()
            .map(|v| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(CodecError::JCal(format!("value is not a string: {v}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(?data_type, values = values.len(), "read jCal property");
        Ok((Self::new(data_type, values), parameters))
    }

    /// Parse a jCal property from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or not a jCal property.
    pub fn from_json(src: &str) -> Result<(Self, Parameters), CodecError> {
        let property: Value = serde_json::from_str(src)?;
        Self::from_property(&property)
    }

    /// Write the value back as a jCal property array. Names and types are
    /// lower-cased; `VALUE` is omitted since the type slot carries it.
    #[must_use]
    pub fn to_property(&self, name: &str, parameters: &Parameters) -> Value {
        let mut params = Map::new();
        for (key, values) in parameters.iter().filter(|(key, _)| *key != KW_VALUE) {
            let value = match values {
                [single] => Value::String(single.clone()),
                _ => Value::Array(values.iter().cloned().map(Value::String).collect()),
            };
            params.insert(key.to_ascii_lowercase(), value);
        }

        let data_type = match &self.data_type {
            Some(t) => t.to_string().to_ascii_lowercase(),
            None => JCAL_UNKNOWN.to_owned(),
        };

        let mut items = vec![
            Value::String(name.to_ascii_lowercase()),
            Value::Object(params),
            Value::String(data_type),
        ];
        items.extend(self.values.iter().cloned().map(Value::String));
        Value::Array(items)
    }
}

fn read_parameters(params: &Value) -> Result<Parameters, CodecError> {
    let Value::Object(map) = params else {
        return Err(CodecError::JCal(format!("parameters are not an object: {params}")));
    };

    let mut parameters = Parameters::new();
    for (key, value) in map {
        match value {
            Value::String(s) => parameters.put(key, s.as_str()),
            Value::Array(items) => {
                for item in items {
                    let Value::String(s) = item else {
                        return Err(CodecError::JCal(format!(
                            "parameter {key} has a non-string value: {item}"
                        )));
                    };
                    parameters.put(key, s.as_str());
                }
            }
            _ => {
                return Err(CodecError::JCal(format!(
                    "parameter {key} has a non-string value: {value}"
                )));
            }
        }
    }
    Ok(parameters)
}
