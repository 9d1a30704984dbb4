use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
///
/// All timestamp fields are measured in whole milliseconds elapsed since this
/// instant. A 41-bit field gives roughly 69 years of headroom past it.
pub const TWITTER_EPOCH: Duration = Duration::from_millis(1_288_834_974_657);

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// This abstraction lets a worker run against the real system clock or a
/// mocked time source in tests.
///
/// # Example
///
/// ```
/// use sleet::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;
}

impl<T: TimeSource> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (*self).current_millis()
    }
}

/// A [`TimeSource`] backed by [`SystemTime::now`].
///
/// This is the clock a worker should run against in production. Note that the
/// system clock is *not* monotonic: NTP adjustments can step it backwards, in
/// which case `next_id` surfaces [`Error::ClockRegression`] instead of
/// issuing an ID.
///
/// [`Error::ClockRegression`]: crate::Error::ClockRegression
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_millis() as i64
    }
}

/// Spins until the clock reads strictly later than `last`, returning the
/// advanced millisecond value.
///
/// This is the sequence-exhaustion wait: the caller has issued every sequence
/// value for the current millisecond and must not produce another ID until
/// the clock ticks. Bounded by wall time (at most ~1ms against a real clock)
/// and not cancellable.
pub(crate) fn until_next_millis<C: TimeSource>(clock: &C, last: i64) -> i64 {
    let mut now = clock.current_millis();
    while now <= last {
        core::hint::spin_loop();
        now = clock.current_millis();
    }
    now
}

/// Converts an absolute [`SystemTime`] to milliseconds since the Unix epoch.
///
/// Times before the Unix epoch map to negative values rather than erroring,
/// mirroring integer Unix-millisecond arithmetic.
pub(crate) fn unix_millis_of(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as i64,
        Err(e) => -(e.duration().as_millis() as i64),
    }
}
