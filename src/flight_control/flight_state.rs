use super::{physics, vehicle_config::VehicleConfig};
use crate::event;

/// Mutable kinematic and propellant state of the vehicle.
///
/// The state only moves forward: fuel never increases while the mission is
/// active, the altitude is clamped at the surface and the stage counter goes
/// `0 -> 1 -> 2`. Starting over means building a new `FlightState`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    /// Current total mass in kg.
    mass_kg: f64,
    /// Remaining fuel in kg.
    fuel_kg: f64,
    /// Fuel loaded at liftoff, the 100% reference.
    loaded_fuel_kg: f64,
    /// Structural mass left when stage 1 is gone and the tanks are empty.
    dry_mass_kg: f64,
    /// Altitude above the surface in m.
    altitude_m: f64,
    /// Vertical speed in m/s.
    speed_ms: f64,
    /// 0 on the pad, 1 and 2 during powered ascent.
    stage: u8,
    elapsed_s: u64,
    /// Consumption per tick, doubled while a fuel leak is active.
    burn_rate_kg_s: f64,
    mission_active: bool,
    fuel_leak_active: bool,
    /// Raised by [`FlightState::tick`] once stage 1 passed the separation altitude.
    separation_pending: bool,
}

impl FlightState {
    pub fn new(config: &VehicleConfig) -> Self {
        Self {
            mass_kg: config.initial_mass_kg(),
            fuel_kg: config.fuel_mass_kg(),
            loaded_fuel_kg: config.fuel_mass_kg(),
            dry_mass_kg: config.dry_mass_kg(),
            altitude_m: 0.0,
            speed_ms: 0.0,
            stage: 0,
            elapsed_s: 0,
            burn_rate_kg_s: config.stage1_burn_rate_kg_s(),
            mission_active: true,
            fuel_leak_active: false,
            separation_pending: false,
        }
    }

    pub fn mass_kg(&self) -> f64 { self.mass_kg }
    pub fn fuel_kg(&self) -> f64 { self.fuel_kg }
    pub fn altitude_m(&self) -> f64 { self.altitude_m }
    pub fn speed_ms(&self) -> f64 { self.speed_ms }
    pub fn stage(&self) -> u8 { self.stage }
    pub fn elapsed_s(&self) -> u64 { self.elapsed_s }
    pub fn burn_rate_kg_s(&self) -> f64 { self.burn_rate_kg_s }
    pub fn is_mission_active(&self) -> bool { self.mission_active }
    pub fn is_fuel_leak_active(&self) -> bool { self.fuel_leak_active }
    pub fn is_separation_pending(&self) -> bool { self.separation_pending }

    pub fn altitude_km(&self) -> f64 { self.altitude_m / 1000.0 }
    pub fn speed_kmh(&self) -> f64 { self.speed_ms * 3.6 }

    pub fn fuel_percent(&self) -> f64 {
        if self.loaded_fuel_kg > 0.0 { self.fuel_kg / self.loaded_fuel_kg * 100.0 } else { 0.0 }
    }

    /// Whether altitude and speed are both at or above the mission targets.
    pub fn targets_met(&self, config: &VehicleConfig) -> bool {
        self.altitude_km() >= config.target_altitude_km()
            && self.speed_kmh() >= config.target_speed_kmh()
    }

    /// Advances the vehicle by one simulated second.
    ///
    /// Burns fuel first, then integrates the vertical force balance with the
    /// resulting mass. While the vehicle sits on the ground without enough
    /// thrust to lift off only the clock moves. Running dry clears the
    /// mission-active flag in the same tick.
    pub fn tick(&mut self, config: &VehicleConfig) {
        if !self.mission_active {
            return;
        }
        if self.stage == 0 {
            self.elapsed_s += 1;
            return;
        }

        let fuel_used = self.fuel_kg.min(self.burn_rate_kg_s);
        self.fuel_kg -= fuel_used;
        let stage1_mass = if self.stage == 1 { config.stage1_dry_mass_kg() } else { 0.0 };
        self.mass_kg = self.dry_mass_kg + stage1_mass + self.fuel_kg;

        let net_force = physics::net_force(
            config.thrust_for(self.stage),
            self.mass_kg,
            self.altitude_m,
            self.speed_ms,
        );
        let grounded = net_force < 0.0 && self.altitude_m <= 0.0;
        if !grounded {
            self.speed_ms += net_force / self.mass_kg;
            if self.altitude_m + self.speed_ms < 0.0 {
                self.altitude_m = 0.0;
                self.speed_ms = 0.0;
            } else {
                self.altitude_m += self.speed_ms;
            }
        }
        self.elapsed_s += 1;

        if self.stage == 1 && self.altitude_m >= config.stage_separation_altitude_m() {
            self.separation_pending = true;
        }
        if self.fuel_kg <= 0.0 {
            self.fuel_kg = 0.0;
            self.mission_active = false;
        }
        event!(
            "T+{}s stage {} alt {:.0} m v {:.1} m/s fuel {:.0} kg net {net_force:.0} N",
            self.elapsed_s,
            self.stage,
            self.altitude_m,
            self.speed_ms,
            self.fuel_kg
        );
    }

    /// Lights stage 1. Only valid on the pad.
    pub(crate) fn ignite(&mut self) {
        if self.stage == 0 {
            self.stage = 1;
        }
    }

    /// Drops stage 1 and switches to the stage 2 consumption rate.
    pub(crate) fn separate_stage(&mut self, config: &VehicleConfig) {
        if self.stage != 1 {
            return;
        }
        self.stage = 2;
        self.separation_pending = false;
        self.burn_rate_kg_s = config.stage2_burn_rate_kg_s();
        if self.fuel_leak_active {
            self.burn_rate_kg_s *= 2.0;
        }
    }

    /// Starts a permanent fuel leak. Returns `false` if one is already active.
    pub(crate) fn activate_fuel_leak(&mut self) -> bool {
        if self.fuel_leak_active {
            return false;
        }
        self.fuel_leak_active = true;
        self.burn_rate_kg_s *= 2.0;
        true
    }

    /// Ends the mission. Subsequent ticks are no-ops.
    pub(crate) fn deactivate(&mut self) { self.mission_active = false; }
}
