// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Options for reading and writing recurrence dates.
///
/// Deserializable so it can be embedded in an application config:
///
/// ```toml
/// default_tzid = "Asia/Shanghai"
/// admit_period_without_start = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Zone for date-only and floating values when no `TZID` is given.
    ///
    /// Default: `None`, meaning UTC.
    pub default_tzid: Option<String>,

    /// Whether xCal periods without a `<start>` element are kept.
    ///
    /// Default: `true`.
    pub admit_period_without_start: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            default_tzid: None,
            admit_period_without_start: true,
        }
    }
}

impl CodecOptions {
    /// Set the default time zone identifier.
    #[must_use]
    pub fn default_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.default_tzid = Some(tzid.into());
        self
    }

    /// Set whether xCal periods without a start are kept.
    #[must_use]
    pub const fn admit_period_without_start(mut self, admit: bool) -> Self {
        self.admit_period_without_start = admit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml() {
        let options: CodecOptions = toml::from_str(
            r#"
default_tzid = "Asia/Shanghai"
admit_period_without_start = false
"#,
        )
        .unwrap();
        assert_eq!(
            options,
            CodecOptions::default()
                .default_tzid("Asia/Shanghai")
                .admit_period_without_start(false)
        );
    }

    #[test]
    fn fills_missing_fields_with_defaults() {
        let options: CodecOptions = toml::from_str("").unwrap();
        assert_eq!(options, CodecOptions::default());
        assert!(options.admit_period_without_start);
        assert_eq!(options.default_tzid, None);
    }
}
