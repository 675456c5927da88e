//! Integer fields as the service writes them.
//!
//! JSON Schema's `integer` (and `const: 405`) accepts `405.0`, so a body
//! the schema layer passed may carry integral floats. Decoding goes through
//! [`serde_json::Number`] to accept every value the schemas accept.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Deserialize a non-negative integer written as `7` or `7.0`.
pub(crate) fn integral<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let number = Number::deserialize(deserializer)?;
    let value = number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .ok_or_else(|| D::Error::custom(format!("{number} is not a non-negative integer")))?;
    T::try_from(value).map_err(|_| D::Error::custom(format!("{number} is out of range")))
}
