use crate::profile::{ProfileError, VehicleProfile};

/// Immutable physical description of a two-stage vehicle and its mission targets.
///
/// Only constructible from a [`VehicleProfile`] that passed validation, so every
/// value is finite and strictly positive, and both the loaded fuel and the
/// stage 1 structure are lighter than the vehicle at liftoff.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    initial_mass_kg: f64,
    fuel_mass_kg: f64,
    stage1_dry_mass_kg: f64,
    stage1_thrust_n: f64,
    stage2_thrust_n: f64,
    stage1_burn_rate_kg_s: f64,
    stage2_burn_rate_kg_s: f64,
    stage_separation_altitude_m: f64,
    target_altitude_km: f64,
    target_speed_kmh: f64,
}

impl VehicleConfig {
    pub fn initial_mass_kg(&self) -> f64 { self.initial_mass_kg }
    pub fn fuel_mass_kg(&self) -> f64 { self.fuel_mass_kg }
    pub fn stage1_dry_mass_kg(&self) -> f64 { self.stage1_dry_mass_kg }
    pub fn stage1_burn_rate_kg_s(&self) -> f64 { self.stage1_burn_rate_kg_s }
    pub fn stage2_burn_rate_kg_s(&self) -> f64 { self.stage2_burn_rate_kg_s }
    pub fn stage_separation_altitude_m(&self) -> f64 { self.stage_separation_altitude_m }
    pub fn target_altitude_km(&self) -> f64 { self.target_altitude_km }
    pub fn target_speed_kmh(&self) -> f64 { self.target_speed_kmh }

    /// Structural mass that remains once all fuel is gone and stage 1 is dropped.
    pub fn dry_mass_kg(&self) -> f64 { self.initial_mass_kg - self.fuel_mass_kg }

    /// Thrust delivered while `stage` is burning. Nothing burns on the pad.
    pub fn thrust_for(&self, stage: u8) -> f64 {
        match stage {
            1 => self.stage1_thrust_n,
            2 => self.stage2_thrust_n,
            _ => 0.0,
        }
    }
}

impl TryFrom<&VehicleProfile> for VehicleConfig {
    type Error = ProfileError;

    fn try_from(p: &VehicleProfile) -> Result<Self, Self::Error> {
        let positives = [
            ("initial_mass_kg", p.initial_mass_kg),
            ("fuel_mass_kg", p.fuel_mass_kg),
            ("stage1_dry_mass_kg", p.stage1_dry_mass_kg),
            ("stage1_thrust_n", p.stage1_thrust_n),
            ("stage2_thrust_n", p.stage2_thrust_n),
            ("stage1_burn_rate_kg_s", p.stage1_burn_rate_kg_s),
            ("stage2_burn_rate_kg_s", p.stage2_burn_rate_kg_s),
            ("stage_separation_altitude_m", p.stage_separation_altitude_m),
            ("target_altitude_km", p.target_altitude_km),
            ("target_speed_kmh", p.target_speed_kmh),
        ];
        if let Some((key, val)) = positives.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(ProfileError::Invalid(format!("{key} must be positive, got {val}")));
        }
        if p.fuel_mass_kg >= p.initial_mass_kg {
            return Err(ProfileError::Invalid(String::from(
                "fuel_mass_kg must be less than initial_mass_kg",
            )));
        }
        if p.stage1_dry_mass_kg >= p.initial_mass_kg {
            return Err(ProfileError::Invalid(String::from(
                "stage1_dry_mass_kg must be less than initial_mass_kg",
            )));
        }
        Ok(Self {
            initial_mass_kg: p.initial_mass_kg,
            fuel_mass_kg: p.fuel_mass_kg,
            stage1_dry_mass_kg: p.stage1_dry_mass_kg,
            stage1_thrust_n: p.stage1_thrust_n,
            stage2_thrust_n: p.stage2_thrust_n,
            stage1_burn_rate_kg_s: p.stage1_burn_rate_kg_s,
            stage2_burn_rate_kg_s: p.stage2_burn_rate_kg_s,
            stage_separation_altitude_m: p.stage_separation_altitude_m,
            target_altitude_km: p.target_altitude_km,
            target_speed_kmh: p.target_speed_kmh,
        })
    }
}
