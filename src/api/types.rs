//! TMDb response records
//!
//! Fields are deserialized leniently: a value of the wrong JSON type is
//! treated as missing instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of a movie's `cast` array (`/movie/{id}/credits`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CastMember {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub character: Option<String>,
}

/// One entry of a person's `cast` credits (`/person/{id}/movie_credits`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieCredit {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: Option<String>,
}

/// Normalize an id given as a JSON number or a non-empty string
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Deserialize every entry of the payload's `cast` array that parses
///
/// A missing or non-array `cast` yields an empty list.
pub fn cast_entries<T: DeserializeOwned>(payload: &Value) -> Vec<T> {
    payload
        .get("cast")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| T::deserialize(entry).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_i64))
}
