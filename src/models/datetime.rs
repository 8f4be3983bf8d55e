//! Wire format for zone-less date-times.
//!
//! Times are written as `YYYY-MM-DDTHH:MM:SS`. On input the seconds may be
//! omitted (the shape produced by a `datetime-local` form field) and a space
//! may stand in for the `T`.

use chrono::NaiveDateTime;

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a local date-time in any of the accepted input shapes.
pub fn parse(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map_or_else(|| NaiveDateTime::parse_from_str(input, FORMAT), Ok)
}

pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// `#[serde(with = "datetime::local")]`
pub mod local {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "datetime::optional")]`; null and the empty string both
/// mean "not set".
pub mod optional {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn accepts_form_field_shape_without_seconds() {
        assert_eq!(parse("2024-05-01T09:30").unwrap(), expected());
    }

    #[test]
    fn accepts_seconds_and_space_separator() {
        assert_eq!(parse("2024-05-01T09:30:00").unwrap(), expected());
        assert_eq!(parse("2024-05-01 09:30:00").unwrap(), expected());
        assert_eq!(parse(" 2024-05-01 09:30 ").unwrap(), expected());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("tomorrow morning").is_err());
        assert!(parse("2024-05-01").is_err());
    }

    #[test]
    fn formats_with_seconds() {
        assert_eq!(format(&expected()), "2024-05-01T09:30:00");
    }
}
