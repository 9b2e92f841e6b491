// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::codec::{
    RecurrenceDatesCodec, WARN_DATE, WARN_DURATION, WARN_END, WARN_NO_START, WARN_START,
};
use crate::error::CodecError;
use crate::keyword::{
    KW_RDATE, XCAL_DATE, XCAL_DATETIME, XCAL_DURATION, XCAL_END, XCAL_PERIOD, XCAL_START,
};
use crate::parameter::Parameters;
use crate::property::{DateList, RecurrenceDates};
use crate::value::{DateTimeCodec, DurationCodec, InstantOrDate, Period, PeriodEnd};
use crate::warning::Warnings;
use crate::xml::XmlElement;

impl<C: DateTimeCodec + DurationCodec> RecurrenceDatesCodec<C> {
    /// Append the value children to an xCal property element, in extended
    /// form.
    pub fn write_xml(&self, property: &RecurrenceDates, element: &mut XmlElement) {
        tracing::debug!(values = property.len(), "writing RDATE xCal");
        match property {
            RecurrenceDates::Dates(dates) => {
                let has_time = dates.has_time();
                let name = if has_time { XCAL_DATETIME } else { XCAL_DATE };
                for value in dates.values() {
                    element.append(name, self.format_extended(value, has_time));
                }
            }
            RecurrenceDates::Periods(periods) => {
                for period in periods {
                    let mut child = XmlElement::new(XCAL_PERIOD);
                    if let Some(start) = period.start() {
                        child.append(XCAL_START, self.format_extended(start, start.has_time()));
                    }
                    match period.ending() {
                        PeriodEnd::End(end) => {
                            child.append(XCAL_END, self.format_extended(end, end.has_time()));
                        }
                        PeriodEnd::Duration(duration) => {
                            let duration = self.collaborator.format_duration(duration);
                            child.append(XCAL_DURATION, duration);
                        }
                    }
                    element.append_element(child);
                }
            }
        }
    }

    /// Read the value children of an xCal property element.
    ///
    /// Periods are read when there is any `<period>` child. Otherwise the
    /// `<date-time>` and then the `<date>` children are read into one list,
    /// which has a time of day if any `<date-time>` is present.
    pub fn parse_xml(
        &self,
        element: &XmlElement,
        parameters: &Parameters,
        warnings: &mut Warnings,
    ) -> RecurrenceDates {
        let tzid = parameters.tzid();
        if element.children(XCAL_PERIOD).next().is_some() {
            tracing::debug!(
                values = element.children(XCAL_PERIOD).count(),
                "parsing RDATE xCal periods"
            );
            let periods = element
                .children(XCAL_PERIOD)
                .filter_map(|period| self.parse_xml_period(period, tzid, warnings))
                .collect();
            return RecurrenceDates::Periods(periods);
        }

        let date_times = element.all(XCAL_DATETIME);
        let dates = element.all(XCAL_DATE);
        let has_time = !date_times.is_empty();
        tracing::debug!(
            date_times = date_times.len(),
            dates = dates.len(),
            "parsing RDATE xCal dates"
        );

        let values = date_times
            .into_iter()
            .chain(dates)
            .filter_map(|raw| match self.collaborator.parse_date_time(raw, tzid) {
                Ok(v) => Some(v),
                Err(_) => {
                    warnings.push(format!("{WARN_DATE}: {raw}"));
                    None
                }
            })
            .collect();
        RecurrenceDates::Dates(DateList::new(values, has_time))
    }

    /// Read an xCal property document, including its `<parameters>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed XML.
    pub fn parse_xcal(
        &self,
        src: &str,
        warnings: &mut Warnings,
    ) -> Result<(RecurrenceDates, Parameters), CodecError> {
        let element = XmlElement::from_xml(src)?;
        let parameters = Parameters::from_xcal(&element);
        let rdate = self.parse_xml(&element, &parameters, warnings);
        Ok((rdate, parameters))
    }

    /// Write an xCal `<rdate>` document with its `<parameters>`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialising the document fails.
    pub fn write_xcal(
        &self,
        property: &RecurrenceDates,
        parameters: &Parameters,
    ) -> Result<String, CodecError> {
        let mut element = XmlElement::new(KW_RDATE.to_ascii_lowercase());
        parameters.write_xcal(&mut element);
        self.write_xml(property, &mut element);
        element.to_xml()
    }

    fn format_extended(&self, value: &InstantOrDate, has_time: bool) -> String {
        self.collaborator.format_date_time(value, has_time, true)
    }

    fn parse_xml_period(
        &self,
        period: &XmlElement,
        tzid: Option<&str>,
        warnings: &mut Warnings,
    ) -> Option<Period> {
        let start = match period.first(XCAL_START) {
            Some(raw) => match self.collaborator.parse_date_time(raw, tzid) {
                Ok(start) => Some(start),
                Err(_) => {
                    warnings.push(format!("{WARN_START}: {raw}"));
                    return None;
                }
            },
            None => None,
        };

        let (ending, raw) = if let Some(raw) = period.first(XCAL_END) {
            match self.collaborator.parse_date_time(raw, tzid) {
                Ok(end) => (PeriodEnd::End(end), raw),
                Err(_) => {
                    warnings.push(format!("{WARN_END}: {raw}"));
                    return None;
                }
            }
        } else if let Some(raw) = period.first(XCAL_DURATION) {
            match self.collaborator.parse_duration(raw) {
                Ok(duration) => (PeriodEnd::Duration(duration), raw),
                Err(_) => {
                    warnings.push(format!("{WARN_DURATION}: {raw}"));
                    return None;
                }
            }
        } else {
            return None;
        };

        if start.is_none() {
            if self.options.admit_period_without_start {
                tracing::warn!(ending = raw, "admitting time period without start");
            } else {
                tracing::warn!(ending = raw, "rejecting time period without start");
                warnings.push(format!("{WARN_NO_START}: {raw}"));
                return None;
            }
        }
        Some(Period::new(start, ending))
    }
}
