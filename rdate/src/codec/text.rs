// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::codec::RecurrenceDatesCodec;
use crate::lexer::split_list;
use crate::parameter::Parameters;
use crate::property::RecurrenceDates;
use crate::value::{DateTimeCodec, DurationCodec};
use crate::warning::Warnings;

impl<C: DateTimeCodec + DurationCodec> RecurrenceDatesCodec<C> {
    /// Write the line body (no name or parameters), e.g.
    /// `20200115T090000Z/PT30M,20200116T090000Z/PT30M`.
    #[must_use]
    pub fn write_text(&self, property: &RecurrenceDates) -> String {
        tracing::debug!(values = property.len(), "writing RDATE text");
        self.write_values(property).join(",")
    }

    /// Read a line body. The shape comes from `VALUE` (default `DATE-TIME`),
    /// the zone of floating and date-only values from `TZID`.
    pub fn parse_text(
        &self,
        body: &str,
        parameters: &Parameters,
        warnings: &mut Warnings,
    ) -> RecurrenceDates {
        let data_type = parameters.value_type();
        let values = split_list(body);
        tracing::debug!(?data_type, values = values.len(), "parsing RDATE text");
        self.parse_values(&values, data_type.as_ref(), parameters.tzid(), warnings)
    }
}
