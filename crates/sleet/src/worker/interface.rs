use crate::{Flake, Result};
use std::time::SystemTime;

/// A minimal interface for things that yield packed IDs.
///
/// Both worker variants implement this, so callers can hold either behind the
/// same bound.
pub trait Generator<ID: Flake> {
    /// Issues the next unique ID, advancing the worker's internal state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the clock read earlier than the
    /// last issued timestamp; no state is mutated in that case.
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    fn next_id(&self) -> Result<ID>;

    /// Reconstructs the ID this worker would have issued at `t` with the
    /// given sequence value. Pure: no state changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForwardTime`] if the worker has already issued an ID
    /// and `t` lies after its last issuance.
    ///
    /// [`Error::ForwardTime`]: crate::Error::ForwardTime
    fn get_id(&self, t: SystemTime, sequence: i64) -> Result<ID>;

    /// Returns the absolute instant of the last issued ID, or the Unix epoch
    /// if none has been issued yet.
    fn last_timestamp(&self) -> SystemTime;
}
