//! Error types for ID generation and decoding.
//!
//! This module defines the central `Error` enum, which captures every failure
//! the crate can surface. All failures are synchronous return values: the
//! core never logs, retries, or terminates the process. Whether to back off
//! and retry after a clock regression is caller policy.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for worker construction, ID generation, and the
/// quoted-text codec.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The node identity is outside its bit-field range.
    #[error("node id must be between 0 and {max}, got {value}")]
    InvalidNode { value: i64, max: i64 },

    /// The datacenter identity is outside its bit-field range.
    #[error("datacenter id must be between 0 and {max}, got {value}")]
    InvalidDatacenter { value: i64, max: i64 },

    /// The wall clock read earlier than the last issued timestamp. No ID was
    /// produced and no state was mutated.
    #[error("clock moved backwards; refusing to generate an id for {behind_ms} milliseconds")]
    ClockRegression { behind_ms: i64 },

    /// `get_id` was asked to reconstruct an ID for a time after the worker's
    /// last issuance. Reconstruction never forecasts; use `next_id` for new
    /// IDs.
    #[error("requested time is after the last issued id; use next_id instead")]
    ForwardTime,

    /// `get_id` was asked to reconstruct an ID for a time before the custom
    /// epoch. The timestamp field cannot encode negative offsets.
    #[error("requested time predates the id epoch")]
    PreEpochTime,

    /// The quoted-text input was not a double-quoted decimal of at least
    /// three bytes. Carries the offending input for diagnostics.
    #[error("invalid quoted id {original:?}")]
    MalformedQuotedInt { original: Vec<u8> },

    /// The interior of a well-quoted input was not a base-10 64-bit integer.
    #[error(transparent)]
    ParseInt(#[from] core::num::ParseIntError),
}
