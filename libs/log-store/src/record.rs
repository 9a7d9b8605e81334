use serde::{Deserialize, Serialize};

/// A single entry in the log: opaque bytes plus the offset the log gave them.
///
/// On the wire `value` is a standard base64 string. `offset` is optional on
/// input; whatever the caller puts there is overwritten on append.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, with = "base64_bytes")]
    pub value: Vec<u8>,
    #[serde(default)]
    pub offset: u64,
}

impl Record {
    /// Record carrying `value` with an unassigned (zero) offset.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            offset: 0,
        }
    }
}

mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        // null decodes to an empty value, same as an omitted byte slice
        let encoded = Option::<String>::deserialize(deserializer)?;
        match encoded {
            Some(s) => base64::engine::general_purpose::STANDARD
                .decode(s)
                .map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_base64_on_the_wire() {
        let record = Record {
            value: b"this is log request 1".to_vec(),
            offset: 7,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["value"], "dGhpcyBpcyBsb2cgcmVxdWVzdCAx");
        assert_eq!(json["offset"], 7);
    }

    #[test]
    fn offset_is_optional_on_input() {
        let record: Record = serde_json::from_str(r#"{"value":"aGVsbG8="}"#).unwrap();
        assert_eq!(record.value, b"hello");
        assert_eq!(record.offset, 0);
    }

    #[test]
    fn missing_value_decodes_to_empty() {
        let record: Record = serde_json::from_str(r#"{"offset":3}"#).unwrap();
        assert!(record.value.is_empty());
        assert_eq!(record.offset, 3);
    }

    #[test]
    fn null_value_decodes_to_empty() {
        let record: Record = serde_json::from_str(r#"{"value":null,"offset":3}"#).unwrap();
        assert!(record.value.is_empty());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = serde_json::from_str::<Record>(r#"{"value":"not base64!"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn binary_values_survive_serialization() {
        let record = Record::new(vec![0u8, 159, 146, 150, 255]);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
