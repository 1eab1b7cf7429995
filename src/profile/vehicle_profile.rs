use super::ProfileError;
use crate::{flight_control::VehicleConfig, mode_control::FailureOdds};
use serde::Deserialize;

/// Raw profile document as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleProfile {
    pub initial_mass_kg: f64,
    pub fuel_mass_kg: f64,
    pub stage1_dry_mass_kg: f64,
    pub stage1_thrust_n: f64,
    pub stage2_thrust_n: f64,
    pub stage1_burn_rate_kg_s: f64,
    pub stage2_burn_rate_kg_s: f64,
    pub stage_separation_altitude_m: f64,
    pub target_altitude_km: f64,
    pub target_speed_kmh: f64,
    #[serde(default)]
    pub failure_odds: FailureOdds,
}

impl VehicleProfile {
    /// Validates the profile and splits it into the vehicle description and the
    /// failure odds of the mission.
    pub fn into_parts(self) -> Result<(VehicleConfig, FailureOdds), ProfileError> {
        let config = VehicleConfig::try_from(&self)?;
        self.failure_odds.validate()?;
        Ok((config, self.failure_odds))
    }
}

#[cfg(test)]
impl VehicleProfile {
    /// Two stage orbital vehicle that reaches its targets after 386 ticks when
    /// nothing fails.
    pub(crate) fn leo_fixture() -> Self {
        Self {
            initial_mass_kg: 550_000.0,
            fuel_mass_kg: 480_000.0,
            stage1_dry_mass_kg: 25_000.0,
            stage1_thrust_n: 9.0e6,
            stage2_thrust_n: 1.8e6,
            stage1_burn_rate_kg_s: 2_800.0,
            stage2_burn_rate_kg_s: 450.0,
            stage_separation_altitude_m: 70_000.0,
            target_altitude_km: 400.0,
            target_speed_kmh: 8_500.0,
            failure_odds: FailureOdds::NONE,
        }
    }

    /// Vehicle whose engines can never lift it off the pad. Burns
    /// `fuel_mass_kg` at one kilogram per second.
    pub(crate) fn grounded_fixture(fuel_mass_kg: f64) -> Self {
        Self {
            initial_mass_kg: 500_000.0,
            fuel_mass_kg,
            stage1_dry_mass_kg: 25_000.0,
            stage1_thrust_n: 1_000.0,
            stage2_thrust_n: 1_000.0,
            stage1_burn_rate_kg_s: 1.0,
            stage2_burn_rate_kg_s: 1.0,
            stage_separation_altitude_m: 70_000.0,
            target_altitude_km: 400.0,
            target_speed_kmh: 8_500.0,
            failure_odds: FailureOdds::NONE,
        }
    }
}
