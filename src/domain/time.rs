//! Trade timing values.
//!
//! A deadline is a data value checked once at operation entry, not a
//! live timeout: the engine has no clock of its own, so the caller
//! supplies the current time alongside each trade.

use core::fmt;

/// A point in time, in seconds, supplied by the execution substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a new `Timestamp` from raw seconds.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The latest time at which a trade may execute.
///
/// A trade whose deadline lies in the past is rejected at entry with
/// [`ExchangeError::DeadlineElapsed`](crate::error::ExchangeError::DeadlineElapsed);
/// a deadline exactly equal to the current time is still valid.
///
/// # Examples
///
/// ```
/// use ecl_exchange::domain::{Deadline, Timestamp};
///
/// let deadline = Deadline::new(100);
/// assert!(!deadline.elapsed_by(Timestamp::new(100)));
/// assert!(deadline.elapsed_by(Timestamp::new(101)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(u64);

impl Deadline {
    /// Creates a new `Deadline` from raw seconds.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `now` is strictly past this deadline.
    #[must_use]
    pub const fn elapsed_by(&self, now: Timestamp) -> bool {
        now.get() > self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
