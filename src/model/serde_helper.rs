//! Lenient deserializers for fields the backend does not encode consistently.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Signed(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Discord snowflakes arrive either as JSON strings or as numbers.
pub fn deserialize_snowflake<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

pub fn deserialize_optional_snowflake<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)
        .map(|value| value.map(StringOrNumber::into_string))
}

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_snowflake")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_optional_snowflake")]
        channel_id: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        roles: Vec<String>,
    }

    #[test]
    fn accepts_string_and_numeric_snowflakes() {
        let a: Holder = serde_json::from_str(r#"{"id":"936677346449170493"}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id":936677346449170493}"#).unwrap();

        assert_eq!(a.id, "936677346449170493");
        assert_eq!(b.id, "936677346449170493");
    }

    #[test]
    fn optional_snowflake_and_null_lists() {
        let h: Holder =
            serde_json::from_str(r#"{"id":"1","channel_id":42,"roles":null}"#).unwrap();

        assert_eq!(h.channel_id.as_deref(), Some("42"));
        assert!(h.roles.is_empty());

        let h: Holder = serde_json::from_str(r#"{"id":"1","channel_id":null}"#).unwrap();
        assert!(h.channel_id.is_none());
    }
}
