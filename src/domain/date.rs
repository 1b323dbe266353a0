//! `month/day/year` calendar dates on the wire.
//!
//! Use with `#[serde(with = "crate::domain::date::mdy")]`.

use chrono::NaiveDate;

use crate::config::INPUT_DATE_FORMAT;

/// Parse a `MM/DD/YYYY` date.
pub fn parse_mdy(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT)
}

/// Format a date as `MM/DD/YYYY`.
pub fn format_mdy(date: &NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

pub mod mdy {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_mdy(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_mdy(&raw).map_err(|e| {
            D::Error::custom(format!("invalid date `{}`, expected MM/DD/YYYY: {}", raw, e))
        })
    }
}
