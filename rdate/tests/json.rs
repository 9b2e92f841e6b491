// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! jCal (RFC 7265) reading and writing of `RDATE` values.

use aimcal_rdate::{
    CodecError, DateList, InstantOrDate, JCalValue, Parameters, RecurrenceDates,
    RecurrenceDatesCodec, ValueType, Warnings,
};
use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde_json::json;

fn instant(s: &str) -> InstantOrDate {
    InstantOrDate::date_time(s.parse::<Timestamp>().unwrap().to_zoned(TimeZone::UTC))
}

fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn reads_values_like_plain_text() {
    let codec = RecurrenceDatesCodec::new();
    let mut warnings = Warnings::new();

    let value = JCalValue::new(
        Some(ValueType::Period),
        values(&[
            "20200115T090000Z/20200115T100000Z",
            "20200115T090000Z",
            "20200115T110000Z/PT30M",
            "20200115T090000Z/not-a-date",
        ]),
    );
    let rdate = codec.parse_json(&value, &Parameters::new(), &mut warnings);

    assert_eq!(rdate.len(), 2);
    assert_eq!(
        warnings.into_vec(),
        [
            "No end date or duration found, skipping time period: 20200115T090000Z",
            "Could not parse end date or duration value, skipping time period: 20200115T090000Z/not-a-date",
        ]
    );
}

#[test]
fn missing_type_means_date_time() {
    let codec = RecurrenceDatesCodec::new();
    let mut warnings = Warnings::new();

    let value = JCalValue::new(None, values(&["20200115T090000Z", "2020-01-16T09:00:00Z"]));
    let rdate = codec.parse_json(&value, &Parameters::new(), &mut warnings);

    assert!(warnings.is_empty());
    assert_eq!(
        rdate,
        RecurrenceDates::Dates(DateList::new(
            vec![
                instant("2020-01-15T09:00:00Z"),
                instant("2020-01-16T09:00:00Z")
            ],
            true
        ))
    );
}

#[test]
fn writes_declared_type() {
    let codec = RecurrenceDatesCodec::new();

    let date_times = RecurrenceDates::Dates(DateList::new(
        vec![instant("2020-01-15T09:00:00Z")],
        true,
    ));
    assert_eq!(
        codec.write_json(&date_times),
        JCalValue::new(Some(ValueType::DateTime), values(&["20200115T090000Z"]))
    );

    let dates = RecurrenceDates::Dates(DateList::new(
        vec![instant("2020-01-15T09:00:00Z")],
        false,
    ));
    assert_eq!(
        codec.write_json(&dates),
        JCalValue::new(Some(ValueType::Date), values(&["20200115"]))
    );

    let empty = RecurrenceDates::Periods(Vec::new());
    assert_eq!(
        codec.write_json(&empty),
        JCalValue::new(Some(ValueType::Period), Vec::new())
    );
}

#[test]
fn reads_and_writes_property_arrays() {
    let codec = RecurrenceDatesCodec::new();
    let mut warnings = Warnings::new();

    let property = json!([
        "rdate",
        { "tzid": "Europe/Paris" },
        "date",
        "20200115",
        "2020-01-16"
    ]);
    let (rdate, params) = codec.parse_jcal_property(&property, &mut warnings).unwrap();

    assert!(warnings.is_empty());
    assert!(!rdate.dates().unwrap().has_time());
    assert_eq!(params.tzid(), Some("Europe/Paris"));
    assert_eq!(
        rdate.dates().unwrap().values()[0].timestamp(),
        "2020-01-14T23:00:00Z".parse::<Timestamp>().unwrap()
    );

    assert_eq!(
        codec.write_jcal_property(&rdate, &params),
        json!([
            "rdate",
            { "tzid": "Europe/Paris" },
            "date",
            "20200115",
            "20200116"
        ])
    );
}

#[test]
fn rejects_malformed_property_arrays() {
    let codec = RecurrenceDatesCodec::new();
    let mut warnings = Warnings::new();

    let fail_cases = [
        json!("20200115T090000Z"),
        json!(["rdate", {}, "date-time", 20_200_115]),
        json!(["rdate", "tzid", "date-time"]),
    ];
    for property in fail_cases {
        let result = codec.parse_jcal_property(&property, &mut warnings);
        assert!(
            matches!(result, Err(CodecError::JCal(_))),
            "Parse {property} should fail"
        );
    }
    assert!(warnings.is_empty());
}
