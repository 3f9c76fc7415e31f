//! Time abstraction for testability.
//!
//! Request signing binds each signature to the current wall-clock time.
//! This module provides a [`Clock`] trait so that tests can inject a fixed
//! instant while production code reads the real system clock.

use std::time::{Duration, SystemTime};

/// Abstraction over system time for testability.
///
/// Implementations provide the current time, allowing tests to inject
/// controlled time values instead of relying on actual system time.
///
/// # Example
///
/// ```
/// use ding_robot::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at a single instant.
///
/// Makes signed request URLs reproducible.
///
/// ```
/// use ding_robot::time::{Clock, FixedClock};
///
/// let clock = FixedClock::from_unix_millis(1_700_000_000_000);
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(SystemTime);

impl FixedClock {
    /// Creates a clock that always returns `instant`.
    #[must_use]
    pub const fn new(instant: SystemTime) -> Self {
        Self(instant)
    }

    /// Creates a clock frozen at the given number of milliseconds after the Unix epoch.
    #[must_use]
    pub fn from_unix_millis(millis: u64) -> Self {
        Self(SystemTime::UNIX_EPOCH + Duration::from_millis(millis))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> SystemTime {
        (**self).now()
    }
}

/// Returns milliseconds since the Unix epoch for the clock's current time.
///
/// Readings before the epoch collapse to `0`.
#[must_use]
pub fn unix_millis<C: Clock + ?Sized>(clock: &C) -> u128 {
    clock
        .now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}
