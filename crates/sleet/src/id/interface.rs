use crate::{Error, Result, TWITTER_EPOCH};
use core::fmt;
use core::hash::Hash;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A packed, time-ordered 64-bit identifier.
///
/// This trait abstracts the bit partition of a Snowflake-style ID so that a
/// single generic worker can issue either layout. Implementors define the
/// field accessors and the packing function; ordering by raw integer value is
/// equivalent to ordering by `(timestamp, identity, sequence)`.
///
/// # Example
///
/// ```
/// use sleet::{Flake, SingleWorkerId};
///
/// let id = SingleWorkerId::from(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.node(), 2);
/// assert_eq!(id.sequence(), 1);
/// ```
pub trait Flake:
    Sized + Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// The custom epoch, in milliseconds since the Unix epoch. Timestamp
    /// fields are offsets from this instant.
    const EPOCH_MS: i64 = TWITTER_EPOCH.as_millis() as i64;

    /// Returns the timestamp field: milliseconds since [`Flake::EPOCH_MS`].
    fn timestamp(&self) -> i64;

    /// Returns the maximum possible value for the timestamp field.
    fn max_timestamp() -> i64;

    /// Returns the node field.
    fn node(&self) -> i64;

    /// Returns the maximum possible value for the node field.
    fn max_node() -> i64;

    /// Returns the datacenter field, or 0 for layouts without one.
    fn datacenter(&self) -> i64;

    /// Returns the maximum possible value for the datacenter field, or 0 for
    /// layouts without one.
    fn max_datacenter() -> i64;

    /// Returns the sequence field.
    fn sequence(&self) -> i64;

    /// Returns the maximum possible value for the sequence field.
    fn max_sequence() -> i64;

    /// Packs an ID from its components. Exact inverse of the field accessors
    /// for every in-range combination.
    fn from_parts(timestamp: i64, node: i64, datacenter: i64, sequence: i64) -> Self;

    /// Returns the raw packed integer.
    fn to_i64(&self) -> i64;

    /// Reinterprets a raw integer as an ID.
    fn from_i64(raw: i64) -> Self;

    /// Returns the absolute instant this ID was issued at: the epoch plus the
    /// encoded millisecond offset.
    fn time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis((Self::EPOCH_MS + self.timestamp()) as u64)
    }

    /// Returns the plain decimal string as bytes.
    fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Encodes this ID in its persisted textual form: the decimal value
    /// wrapped in double quotes, e.g. `13587` encodes to the 7 bytes
    /// `"13587"`.
    fn encode(&self) -> String {
        format!("\"{}\"", self.to_i64())
    }

    /// Decodes the quoted-decimal textual form produced by [`Flake::encode`].
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedQuotedInt`] if the input is shorter than three
    ///   bytes or not wrapped in double quotes; the offending bytes are
    ///   carried in the error.
    /// - [`Error::ParseInt`] if the interior is not a base-10 signed 64-bit
    ///   integer.
    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 3 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
            return Err(Error::MalformedQuotedInt {
                original: bytes.to_vec(),
            });
        }
        let interior = String::from_utf8_lossy(&bytes[1..bytes.len() - 1]);
        let raw = interior.parse::<i64>()?;
        Ok(Self::from_i64(raw))
    }
}
