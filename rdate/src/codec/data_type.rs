// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::codec::RecurrenceDatesCodec;
use crate::parameter::{Parameters, ValueType};
use crate::property::RecurrenceDates;

impl<C> RecurrenceDatesCodec<C> {
    /// The `VALUE` to emit for a property: `DATE` for dates without time,
    /// `PERIOD` for periods, and none (the `DATE-TIME` default) otherwise.
    #[must_use]
    pub fn data_type(&self, property: &RecurrenceDates) -> Option<ValueType> {
        match property {
            RecurrenceDates::Dates(dates) if !dates.has_time() => Some(ValueType::Date),
            RecurrenceDates::Dates(_) => None,
            RecurrenceDates::Periods(_) => Some(ValueType::Period),
        }
    }

    /// Set or remove `VALUE` in `parameters` to match the property. Other
    /// parameters are left alone.
    pub fn prepare_parameters(&self, property: &RecurrenceDates, parameters: &mut Parameters) {
        let data_type = self.data_type(property);
        tracing::debug!(?data_type, "preparing RDATE parameters");
        parameters.set_value_type(data_type.as_ref());
    }
}
