//! Serde support for the quoted-decimal wire form.
//!
//! IDs serialize as the decimal value in a string, so the persisted bytes are
//! exactly the quoted form produced by [`Flake::encode`]: the integer `13587`
//! appears on the wire as the 7 bytes `"13587"`. Serializing as a string
//! (rather than a native integer) keeps 64-bit IDs intact in consumers that
//! round floating-point JSON numbers.
//!
//! [`Flake::encode`]: crate::Flake::encode

use crate::{MultiWorkerId, SingleWorkerId};
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for SingleWorkerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SingleWorkerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuotedVisitor;

        impl de::Visitor<'_> for QuotedVisitor {
            type Value = SingleWorkerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal 64-bit id in a string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<i64>()
                    .map(SingleWorkerId::from_raw)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(QuotedVisitor)
    }
}

impl Serialize for MultiWorkerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MultiWorkerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuotedVisitor;

        impl de::Visitor<'_> for QuotedVisitor {
            type Value = MultiWorkerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal 64-bit id in a string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<i64>()
                    .map(MultiWorkerId::from_raw)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(QuotedVisitor)
    }
}
