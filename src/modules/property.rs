//! Wrapped property encodings shared by module payloads.

/// Boolean stored as `{"value": <bool>}`; a bare boolean is accepted on read.
pub(crate) mod bool_property {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Wrapped {
        value: bool,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Wrapped { value: bool },
        Bare(bool),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        Wrapped { value: *value }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Stored::deserialize(deserializer)? {
            Stored::Wrapped { value } | Stored::Bare(value) => value,
        })
    }
}
