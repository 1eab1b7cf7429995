use crate::profile::ProfileError;
use rand::{Rng, RngCore};
use serde::Deserialize;

/// Per-invocation probabilities of the stochastic stage failures.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FailureOdds {
    /// System malfunction during pre-launch checks.
    pre_launch: f64,
    /// Engine flameout, rolled every stage 1 tick.
    flameout: f64,
    /// Onset of a fuel leak, rolled every stage 2 tick until one occurs.
    fuel_leak: f64,
}

impl Default for FailureOdds {
    fn default() -> Self { Self { pre_launch: 0.006, flameout: 0.001, fuel_leak: 0.005 } }
}

impl FailureOdds {
    /// Deterministic odds: nothing ever fails.
    pub const NONE: FailureOdds = FailureOdds { pre_launch: 0.0, flameout: 0.0, fuel_leak: 0.0 };

    pub fn new(pre_launch: f64, flameout: f64, fuel_leak: f64) -> Result<Self, ProfileError> {
        let odds = Self { pre_launch, flameout, fuel_leak };
        odds.validate()?;
        Ok(odds)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let all = [
            ("pre_launch", self.pre_launch),
            ("flameout", self.flameout),
            ("fuel_leak", self.fuel_leak),
        ];
        match all.iter().find(|(_, p)| !(0.0..=1.0).contains(p)) {
            Some((key, p)) => Err(ProfileError::Invalid(format!(
                "failure_odds.{key} must lie within [0, 1], got {p}"
            ))),
            None => Ok(()),
        }
    }

    pub fn pre_launch(&self) -> f64 { self.pre_launch }
    pub fn flameout(&self) -> f64 { self.flameout }
    pub fn fuel_leak(&self) -> f64 { self.fuel_leak }

    /// Draws a single Bernoulli trial with probability `p`.
    pub(crate) fn roll(p: f64, rng: &mut dyn RngCore) -> bool { rng.random_bool(p.clamp(0.0, 1.0)) }
}
