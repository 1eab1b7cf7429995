use super::{physics, FlightState, VehicleConfig};
use crate::profile::{ProfileError, VehicleProfile};

fn config(profile: &VehicleProfile) -> VehicleConfig { VehicleConfig::try_from(profile).unwrap() }

fn launched(config: &VehicleConfig) -> FlightState {
    let mut flight = FlightState::new(config);
    flight.ignite();
    flight
}

#[test]
fn test_gravity_and_atmosphere() {
    let g0 = physics::gravity_at(0.0);
    assert!((g0 - 9.82).abs() < 0.01, "surface gravity {g0}");
    assert!(physics::gravity_at(400_000.0) < g0);
    assert!((physics::air_density_at(0.0) - 1.225).abs() < 1e-12);
    let rho_h = physics::air_density_at(8_500.0);
    assert!((rho_h - 1.225 / std::f64::consts::E).abs() < 1e-9);
    assert!(physics::drag_force(0.0, 0.0).abs() < f64::EPSILON);
    // 0.5 * 1.225 * 100² * 0.5 * 10.5
    assert!((physics::drag_force(0.0, 100.0) - 32_156.25).abs() < 1e-6);
}

#[test]
fn test_config_validation() {
    let mut profile = VehicleProfile::leo_fixture();
    profile.stage2_thrust_n = 0.0;
    assert!(matches!(VehicleConfig::try_from(&profile), Err(ProfileError::Invalid(_))));

    let mut profile = VehicleProfile::leo_fixture();
    profile.stage1_dry_mass_kg = profile.initial_mass_kg;
    assert!(matches!(VehicleConfig::try_from(&profile), Err(ProfileError::Invalid(_))));

    let mut profile = VehicleProfile::leo_fixture();
    profile.target_speed_kmh = f64::NAN;
    assert!(matches!(VehicleConfig::try_from(&profile), Err(ProfileError::Invalid(_))));
}

#[test]
fn test_pad_tick_only_moves_clock() {
    let config = config(&VehicleProfile::leo_fixture());
    let mut flight = FlightState::new(&config);
    flight.tick(&config);
    assert_eq!(flight.elapsed_s(), 1);
    assert!((flight.fuel_percent() - 100.0).abs() < f64::EPSILON);
    assert!(flight.altitude_m().abs() < f64::EPSILON);
    assert_eq!(flight.stage(), 0);
}

#[test]
fn test_first_tick_burns_fuel_and_climbs() {
    let config = config(&VehicleProfile::leo_fixture());
    let mut flight = launched(&config);
    flight.tick(&config);
    assert!((flight.fuel_kg() - 477_200.0).abs() < 1e-6);
    assert!((flight.mass_kg() - (70_000.0 + 25_000.0 + 477_200.0)).abs() < 1e-6);
    assert!(flight.speed_ms() > 0.0);
    assert!((flight.altitude_m() - flight.speed_ms()).abs() < 1e-9);
    assert!(flight.is_mission_active());
}

#[test]
fn test_grounded_vehicle_stays_on_pad_until_dry() {
    let config = config(&VehicleProfile::grounded_fixture(3.0));
    let mut flight = launched(&config);
    for expected_fuel in [2.0, 1.0] {
        flight.tick(&config);
        assert!(flight.altitude_m().abs() < f64::EPSILON);
        assert!(flight.speed_ms().abs() < f64::EPSILON);
        assert!((flight.fuel_kg() - expected_fuel).abs() < f64::EPSILON);
        assert!(flight.is_mission_active());
    }
    flight.tick(&config);
    assert!(flight.fuel_kg().abs() < f64::EPSILON);
    assert!(!flight.is_mission_active());
    assert_eq!(flight.elapsed_s(), 3);

    let frozen = flight.clone();
    flight.tick(&config);
    assert_eq!(flight, frozen);
}

#[test]
fn test_fuel_never_increases_and_altitude_never_negative() {
    let config = config(&VehicleProfile::leo_fixture());
    let mut flight = launched(&config);
    let mut last_fuel = flight.fuel_kg();
    while flight.is_mission_active() {
        flight.tick(&config);
        if flight.is_separation_pending() {
            flight.separate_stage(&config);
        }
        assert!(flight.fuel_kg() <= last_fuel);
        assert!(flight.altitude_m() >= 0.0);
        last_fuel = flight.fuel_kg();
    }
    assert!(flight.fuel_kg().abs() < f64::EPSILON);
}

#[test]
fn test_separation_is_signalled_not_applied() {
    let config = config(&VehicleProfile::leo_fixture());
    let mut flight = launched(&config);
    while !flight.is_separation_pending() {
        flight.tick(&config);
    }
    assert_eq!(flight.stage(), 1);
    assert!(flight.altitude_m() >= config.stage_separation_altitude_m());

    flight.separate_stage(&config);
    assert_eq!(flight.stage(), 2);
    assert!(!flight.is_separation_pending());
    assert!((flight.burn_rate_kg_s() - 450.0).abs() < f64::EPSILON);

    let fuel_before = flight.fuel_kg();
    flight.tick(&config);
    assert!((flight.mass_kg() - (70_000.0 + flight.fuel_kg())).abs() < 1e-6);
    assert!((fuel_before - flight.fuel_kg() - 450.0).abs() < 1e-6);
}

#[test]
fn test_fuel_leak_doubles_burn_rate_once() {
    let config = config(&VehicleProfile::leo_fixture());
    let mut flight = launched(&config);
    assert!(flight.activate_fuel_leak());
    assert!(!flight.activate_fuel_leak());
    assert!(flight.is_fuel_leak_active());
    assert!((flight.burn_rate_kg_s() - 5_600.0).abs() < f64::EPSILON);
}

#[test]
fn test_targets_need_altitude_and_speed() {
    let mut profile = VehicleProfile::leo_fixture();
    profile.target_altitude_km = 1.0;
    profile.target_speed_kmh = 1.0e6;
    let config = config(&profile);
    let mut flight = launched(&config);
    while flight.altitude_km() < 1.0 {
        flight.tick(&config);
    }
    assert!(!flight.targets_met(&config));
}
