//! Signed durations carried on the wire as nanosecond tick counts.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed span of time with nanosecond granularity.
///
/// Encoded as a single i64 tick count. Unlike `std::time::Duration` this is
/// signed, matching timestamp arithmetic across the cluster.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_nanos(ticks: i64) -> Duration {
        Duration(ticks)
    }

    pub const fn from_micros(us: i64) -> Duration {
        Duration(us * 1_000)
    }

    pub const fn from_millis(ms: i64) -> Duration {
        Duration(ms * 1_000_000)
    }

    pub const fn from_secs(s: i64) -> Duration {
        Duration(s * 1_000_000_000)
    }

    /// The tick count.
    pub const fn count(self) -> i64 {
        self.0
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl From<i64> for Duration {
    fn from(ticks: i64) -> Duration {
        Duration(ticks)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}
