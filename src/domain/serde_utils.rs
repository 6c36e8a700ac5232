//! Serde utilities for homedeck.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Handles numeric identifiers that are floats in memory but usually integral.
///
/// Integral values serialize as JSON integers (`5`, not `5.0`), matching the
/// plain list-of-numbers form of persisted favorites. Deserialization accepts
/// integers, floats and numeric strings.
pub mod integral_number {
    use super::{MAX_EXACT_INTEGER, Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes an `f64`, as an integer when it has no fractional part.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    #[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    /// Deserializes an `f64` from an integer, float or numeric string.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not numeric.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or numeric string")
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value as f64)
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value as f64)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.trim().parse::<f64>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}
