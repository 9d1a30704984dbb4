//! Snowflake-style 64-bit unique IDs without coordination.
//!
//! Each ID packs a millisecond timestamp (relative to [`TWITTER_EPOCH`]), a
//! stable worker identity, and a per-millisecond sequence counter into one
//! signed 64-bit integer. Raw integer order equals issue order, so IDs sort
//! by time; uniqueness across machines only requires that each running worker
//! holds a distinct identity.
//!
//! Two layouts share one generic core:
//!
//! - [`SingleWorkerId`] / [`SingleWorker`]: a 10-bit node identity (up to
//!   1024 workers).
//! - [`MultiWorkerId`] / [`MultiWorker`]: 5-bit node + 5-bit datacenter
//!   identities, Twitter's original partition.
//!
//! # Example
//!
//! ```
//! use sleet::{Flake, MultiWorker, WallClock};
//!
//! # fn main() -> sleet::Result<()> {
//! let worker = MultiWorker::multi(3, 1, WallClock)?;
//!
//! let id = worker.next_id()?;
//! assert_eq!(id.node(), 3);
//! assert_eq!(id.datacenter(), 1);
//!
//! // Reconstruct the same ID from its decoded fields.
//! let same = worker.get_id(id.time(), id.sequence())?;
//! assert_eq!(same, id);
//! # Ok(())
//! # }
//! ```
//!
//! Workers are safe to share across threads: issuance is serialized by a
//! write lock per worker, while the read-only observers only contend with the
//! writer. The persisted textual form is the quoted decimal string (see
//! [`Flake::encode`]); with the `serde` feature the ID types serialize that
//! way directly.

mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod worker;

pub use crate::error::*;
pub use crate::id::*;
pub use crate::time::*;
pub use crate::worker::*;
