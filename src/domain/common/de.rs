//! Deserialization helpers for upstream payload quirks.

use serde::{Deserialize, Deserializer};

/// The upstream serializes some flags as `0`/`1` and others as real
/// booleans, depending on which table they come from.
pub fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// Text columns the upstream stores as NULL come through as JSON `null`;
/// the dashboard expects `""` in both cases.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
