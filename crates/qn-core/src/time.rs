//! Simulated time.
//!
//! # Design
//!
//! Time is a continuous, monotonically non-decreasing scalar advanced only by
//! the event scheduler — there is no relationship to wall-clock time.  It is
//! represented as a newtype over `f64` so that service durations drawn from
//! continuous distributions (exponential, uniform) land on exact event
//! instants without quantization.
//!
//! `SimTime` keeps its inner value private and rejects NaN and negative
//! values at every construction site, which makes the manual `Ord` impl
//! (via `f64::total_cmp`) a genuine total order.  Event queues can therefore
//! key on `SimTime` directly.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// An instant on the virtual clock, in simulated time units.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap a raw value.
    ///
    /// # Panics
    /// Panics if `t` is negative or not finite — simulated time never is.
    pub fn new(t: f64) -> SimTime {
        assert!(t.is_finite() && t >= 0.0, "invalid simulated time: {t}");
        SimTime(t)
    }

    /// The instant `delay` time units after `self`.
    ///
    /// # Panics
    /// Panics if `delay` is negative or not finite.
    pub fn after(self, delay: f64) -> SimTime {
        assert!(
            delay.is_finite() && delay >= 0.0,
            "invalid delay: {delay}"
        );
        SimTime(self.0 + delay)
    }

    /// Time elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics if `earlier > self`.
    pub fn since(self, earlier: SimTime) -> f64 {
        assert!(
            self >= earlier,
            "negative elapsed time: {self} is before {earlier}"
        );
        self.0 - earlier.0
    }

    /// The raw value, for arithmetic and reporting.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
