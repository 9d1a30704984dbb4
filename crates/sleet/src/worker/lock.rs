use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, Flake, Generator, MultiWorkerId, Result, SingleWorkerId, TimeSource, WallClock,
    time::{unix_millis_of, until_next_millis},
};

/// Generation state shared by all callers of one worker.
///
/// `last_timestamp` holds Unix milliseconds of the most recent issuance; 0 is
/// the fresh-worker sentinel. It is monotonically non-decreasing for the
/// worker's lifetime. `sequence` always stays within the layout's sequence
/// field.
struct State {
    last_timestamp: i64,
    sequence: i64,
}

/// A lock-based ID worker, generic over the packed layout and the clock.
///
/// One `Worker` represents one generator instance: its identity fields are
/// validated at construction and never change, while the mutable generation
/// state lives behind an [`RwLock`]. `next_id` takes the write lock; the pure
/// observers `get_id` and `last_timestamp` only take the read lock and never
/// serialize against each other.
///
/// Workers share no state with each other. Uniqueness across workers relies
/// solely on each running instance holding a distinct identity; this crate
/// performs no coordination to assign them.
///
/// # Example
/// ```
/// use sleet::{Flake, SingleWorker, WallClock};
///
/// # fn main() -> sleet::Result<()> {
/// let worker = SingleWorker::single(7, WallClock)?;
/// let id = worker.next_id()?;
/// assert_eq!(id.node(), 7);
/// # Ok(())
/// # }
/// ```
pub struct Worker<ID, C>
where
    ID: Flake,
    C: TimeSource,
{
    node: i64,
    datacenter: i64,
    state: RwLock<State>,
    clock: C,
    _layout: PhantomData<ID>,
}

/// A worker issuing [`SingleWorkerId`]s (10-bit node identity).
pub type SingleWorker<C = WallClock> = Worker<SingleWorkerId, C>;

/// A worker issuing [`MultiWorkerId`]s (5-bit node + 5-bit datacenter
/// identity).
pub type MultiWorker<C = WallClock> = Worker<MultiWorkerId, C>;

impl<C> Worker<SingleWorkerId, C>
where
    C: TimeSource,
{
    /// Creates a single-identity worker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if `node` is outside `0..=1023`.
    pub fn single(node: i64, clock: C) -> Result<Self> {
        Self::with_identity(node, 0, clock)
    }
}

impl<C> Worker<MultiWorkerId, C>
where
    C: TimeSource,
{
    /// Creates a node+datacenter worker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] or [`Error::InvalidDatacenter`] if the
    /// corresponding field is outside `0..=31`.
    pub fn multi(node: i64, datacenter: i64, clock: C) -> Result<Self> {
        Self::with_identity(node, datacenter, clock)
    }
}

impl<ID, C> Worker<ID, C>
where
    ID: Flake,
    C: TimeSource,
{
    /// Creates a worker from raw identity fields, validating each against the
    /// layout's field width. Prefer [`Worker::single`] / [`Worker::multi`]
    /// for the built-in layouts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] or [`Error::InvalidDatacenter`] if a
    /// field is negative or exceeds its mask. No worker is constructed on
    /// failure.
    pub fn with_identity(node: i64, datacenter: i64, clock: C) -> Result<Self> {
        if node < 0 || node > ID::max_node() {
            return Err(Error::InvalidNode {
                value: node,
                max: ID::max_node(),
            });
        }
        if datacenter < 0 || datacenter > ID::max_datacenter() {
            return Err(Error::InvalidDatacenter {
                value: datacenter,
                max: ID::max_datacenter(),
            });
        }
        Ok(Self {
            node,
            datacenter,
            state: RwLock::new(State {
                last_timestamp: 0,
                sequence: 0,
            }),
            clock,
            _layout: PhantomData,
        })
    }

    /// Returns the node identity encoded into every issued ID.
    pub fn node(&self) -> i64 {
        self.node
    }

    /// Returns the datacenter identity, or 0 for single-identity layouts.
    pub fn datacenter(&self) -> i64 {
        self.datacenter
    }

    /// Issues the next unique ID.
    ///
    /// The whole read-modify-write runs under the write lock: sample the
    /// clock, advance or reset the sequence, record the timestamp, pack. When
    /// the sequence wraps within one millisecond, this spins (re-sampling the
    /// clock) until the millisecond advances, which blocks other callers on
    /// this worker for at most ~1ms of wall time.
    ///
    /// For a single worker, successive calls return strictly increasing raw
    /// values as long as the clock never regresses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] with the regression magnitude if
    /// the clock read earlier than the last issued timestamp. Nothing is
    /// mutated; retrying after the clock catches up is caller policy.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Result<ID> {
        let mut state = self.state.write();

        let mut now = self.clock.current_millis();
        if now < state.last_timestamp {
            // Guard dropped on return: an error must never wedge the worker.
            return Err(Error::ClockRegression {
                behind_ms: state.last_timestamp - now,
            });
        }

        if now == state.last_timestamp {
            state.sequence = (state.sequence + 1) & ID::max_sequence();
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond.
                now = until_next_millis(&self.clock, state.last_timestamp);
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = now;
        Ok(ID::from_parts(
            now - ID::EPOCH_MS,
            self.node,
            self.datacenter,
            state.sequence,
        ))
    }

    /// Reconstructs the ID this worker would have issued at `t` with the
    /// given sequence value, typically one extracted from a previously issued
    /// ID. Takes only the read lock; nothing is mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::ForwardTime`] if an ID has been issued
    ///   (`last_timestamp != 0`) and `t` lies after it. Reconstruction works
    ///   at or before the last-known timestamp; it does not forecast future
    ///   IDs.
    /// - [`Error::PreEpochTime`] if `t` is before the custom epoch; the
    ///   timestamp field cannot encode a negative offset.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn get_id(&self, t: SystemTime, sequence: i64) -> Result<ID> {
        let state = self.state.read();

        let target = unix_millis_of(t);
        if target < ID::EPOCH_MS {
            return Err(Error::PreEpochTime);
        }
        if state.last_timestamp != 0 && target > state.last_timestamp {
            return Err(Error::ForwardTime);
        }

        Ok(ID::from_parts(
            target - ID::EPOCH_MS,
            self.node,
            self.datacenter,
            sequence,
        ))
    }

    /// Returns the absolute instant of the last issued ID. A fresh worker
    /// reports the Unix epoch (the 0 sentinel).
    pub fn last_timestamp(&self) -> SystemTime {
        let state = self.state.read();
        UNIX_EPOCH + Duration::from_millis(state.last_timestamp as u64)
    }
}

impl<ID, C> fmt::Debug for Worker<ID, C>
where
    ID: Flake,
    C: TimeSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Identity only; the generation state would need a lock to read.
        f.debug_struct("Worker")
            .field("node", &self.node)
            .field("datacenter", &self.datacenter)
            .finish_non_exhaustive()
    }
}

impl<ID, C> Generator<ID> for Worker<ID, C>
where
    ID: Flake,
    C: TimeSource,
{
    fn next_id(&self) -> Result<ID> {
        self.next_id()
    }

    fn get_id(&self, t: SystemTime, sequence: i64) -> Result<ID> {
        self.get_id(t, sequence)
    }

    fn last_timestamp(&self) -> SystemTime {
        self.last_timestamp()
    }
}
