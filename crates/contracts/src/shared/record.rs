//! Decode contract for persisted records.
//!
//! Producers and consumers of a store key share nothing but the JSON shape.
//! Every consumer goes through [`decode_or_default`], so an absent key,
//! a corrupted value or a record that fails validation all read as the
//! record's default value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("key is not set")]
    Missing,

    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("invalid record: {0}")]
    Invalid(String),
}

/// A value that can live under a store key
pub trait StoreRecord: Serialize + DeserializeOwned {
    /// Shape checks serde cannot express (ranges, non-empty ids, ...)
    fn validate(&self) -> Result<(), DecodeError> {
        Ok(())
    }
}

impl<T: StoreRecord> StoreRecord for Vec<T> {
    fn validate(&self) -> Result<(), DecodeError> {
        self.iter().try_for_each(StoreRecord::validate)
    }
}

impl StoreRecord for String {}

pub fn decode<T: StoreRecord>(raw: Option<&str>) -> Result<T, DecodeError> {
    let raw = raw.ok_or(DecodeError::Missing)?;
    let record: T =
        serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    record.validate()?;
    Ok(record)
}

pub fn decode_or_default<T: StoreRecord + Default>(raw: Option<&str>) -> T {
    decode(raw).unwrap_or_default()
}

pub fn encode<T: StoreRecord>(record: &T) -> Option<String> {
    serde_json::to_string(record).ok()
}

pub(crate) fn ensure(condition: bool, message: impl Into<String>) -> Result<(), DecodeError> {
    if condition {
        Ok(())
    } else {
        Err(DecodeError::Invalid(message.into()))
    }
}

pub(crate) fn ensure_price(value: f64, field: &str) -> Result<(), DecodeError> {
    ensure(
        value.is_finite() && value >= 0.0,
        format!("{} must be a non-negative number", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: i32,
    }

    impl StoreRecord for Counter {
        fn validate(&self) -> Result<(), DecodeError> {
            ensure(self.value >= 0, "value must be non-negative")
        }
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode::<Counter>(None), Err(DecodeError::Missing));
        assert!(matches!(
            decode::<Counter>(Some("{value:")),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode::<Counter>(Some(r#"{"value":-1}"#)),
            Err(DecodeError::Invalid(_))
        ));
        assert_eq!(decode::<Counter>(Some(r#"{"value":3}"#)), Ok(Counter { value: 3 }));
    }

    #[test]
    fn test_malformed_input_collapses_to_default() {
        for raw in ["", "null", "[1,2]", "{\"value\":\"x\"}", "\u{0}", "{\"value\":-5}"] {
            assert_eq!(decode_or_default::<Counter>(Some(raw)), Counter::default());
            assert!(decode_or_default::<Vec<Counter>>(Some(raw)).is_empty());
        }
    }

    #[test]
    fn test_vec_validation_rejects_any_bad_element() {
        let raw = r#"[{"value":1},{"value":-1}]"#;
        assert!(matches!(
            decode::<Vec<Counter>>(Some(raw)),
            Err(DecodeError::Invalid(_))
        ));
    }
}
