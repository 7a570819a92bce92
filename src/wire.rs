//! Wire transcoding: JSON text ↔ candidate and entity shapes.
//!
//! The core never parses transport payloads itself; this module is the
//! collaborator that does. Deserialization is routed through
//! `serde_path_to_error` so a malformed payload reports the exact field
//! that failed.
//!
//! Dates cross the wire as `dd/MM/yyyy` and datetimes as
//! `dd/MM/yyyy HH:mm`.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Result type for wire transcoding.
pub type WireResult<T> = Result<T, WireError>;

/// Error type for wire transcoding.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid json at `{path}`: {message}")]
    Invalid { path: String, message: String },

    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Serialize a value to JSON text.
pub fn to_json<T: Serialize>(value: &T) -> WireResult<String> {
    serde_json::to_string(value).map_err(|e| WireError::Serialize(e.to_string()))
}

/// Deserialize a value from JSON text, reporting the path of the first
/// offending field on failure.
pub fn from_json<T: DeserializeOwned>(json: &str) -> WireResult<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| WireError::Invalid {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// serde helpers for wire dates (`dd/MM/yyyy`).
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// serde helpers for wire datetimes (`dd/MM/yyyy HH:mm`).
pub mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y %H:%M";

    pub fn serialize<S: Serializer>(
        datetime: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&datetime.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Parse a wire-format date (`dd/MM/yyyy`), e.g. from a query parameter.
pub fn parse_wire_date(s: &str) -> WireResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, wire_date::FORMAT).map_err(|e| WireError::Invalid {
        path: ".".to_string(),
        message: format!("invalid date `{s}`: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewStudent, SlotRequest};
    use chrono::NaiveDate;

    #[test]
    fn student_candidate_round_trips() {
        let json = r#"{
            "name": "John",
            "surname": "Doe",
            "birth_date": "01/01/2000",
            "phone_number": "+7 (123) 456-78-90"
        }"#;

        let candidate: NewStudent = from_json(json).unwrap();
        assert_eq!(
            candidate.birth_date,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );

        let serialized = to_json(&candidate).unwrap();
        assert!(serialized.contains("01/01/2000"));
        let back: NewStudent = from_json(&serialized).unwrap();
        assert_eq!(back, candidate);
    }

    #[test]
    fn slot_request_uses_wire_datetime_format() {
        let json = r#"{
            "group_id": 1,
            "teacher_id": 2,
            "start": "26/07/2024 09:00",
            "end": "26/07/2024 10:30"
        }"#;

        let request: SlotRequest = from_json(json).unwrap();
        assert_eq!(request.duration_minutes(), 90);
    }

    #[test]
    fn bad_field_reports_its_path() {
        let json = r#"{
            "name": "John",
            "surname": "Doe",
            "birth_date": "2000-01-01",
            "phone_number": "+7 (123) 456-78-90"
        }"#;

        let err = from_json::<NewStudent>(json).unwrap_err();
        match err {
            WireError::Invalid { path, .. } => assert_eq!(path, "birth_date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_query_parameter_dates() {
        let date = parse_wire_date("26/07/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 26).unwrap());
        assert!(parse_wire_date("2024-07-26").is_err());
    }
}
