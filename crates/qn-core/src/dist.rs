//! Duration distributions for interarrival and service times.

use rand_distr::Exp;

use crate::SimRng;

/// A distribution over non-negative durations.
///
/// `Exponential` and `Uniform` are the two shapes the checkpoint model uses
/// in production configurations; `Fixed` exists for deterministic scenario
/// tests (including the degenerate zero-duration case).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeDist {
    /// Exponential with the given rate: mean duration = 1 / rate.
    Exponential { rate: f64 },
    /// Continuous uniform over `[min, max]`.
    Uniform { min: f64, max: f64 },
    /// Always exactly this duration.
    Fixed(f64),
}

impl TimeDist {
    /// Draw one duration.
    ///
    /// # Panics
    /// Panics if the distribution parameters are invalid (non-positive
    /// exponential rate, inverted uniform bounds).  Production parameters go
    /// through [`SimConfig::validate`][crate::SimConfig::validate] first, so
    /// hitting this is a programming fault.
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        match *self {
            TimeDist::Exponential { rate } => {
                let exp = Exp::new(rate).expect("exponential rate must be positive and finite");
                rng.sample(exp)
            }
            TimeDist::Uniform { min, max } => rng.gen_range(min..=max),
            TimeDist::Fixed(d) => d,
        }
    }
}
