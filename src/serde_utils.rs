//! Serde utility functions for request bodies

use serde::{Deserialize, Deserializer, de};

/// An integer sent either as a JSON number or as a numeric string.
///
/// Browser form controls hand ids and scores over as strings (`"3"`), so both
/// spellings are accepted. Fractions, booleans and non-numeric strings are
/// rejected.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid integer: {:?}", s))),
        }
    }
}

/// Deserialize an `i64` from a number or a numeric string.
///
/// Usage:
/// ```ignore
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
///     difficulty: i64,
/// }
/// ```
pub fn lenient_i64<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(de)?.into_i64()
}

/// Deserialize a `Vec<i64>` whose elements may each be a number or a numeric string.
pub fn lenient_i64_vec<'de, D>(de: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<IntOrString>::deserialize(de)?
        .into_iter()
        .map(IntOrString::into_i64)
        .collect()
}
