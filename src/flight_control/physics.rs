//! Vertical force balance of the simplified single-axis ascent model.

/// Gravitational constant in m³/(kg·s²).
const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
/// Mass of the earth in kg.
const EARTH_MASS_KG: f64 = 5.972e24;
/// Mean earth radius in m.
const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Air density at sea level in kg/m³.
const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
/// Density scale height of the exponential atmosphere in m.
const SCALE_HEIGHT_M: f64 = 8_500.0;
/// Drag coefficient of the vehicle body.
const DRAG_COEFFICIENT: f64 = 0.5;
/// Frontal cross-section area in m².
const CROSS_SECTION_AREA_M2: f64 = 10.5;

/// Gravitational acceleration at `altitude_m` above the surface.
pub fn gravity_at(altitude_m: f64) -> f64 {
    let r = EARTH_RADIUS_M + altitude_m;
    GRAVITATIONAL_CONSTANT * EARTH_MASS_KG / (r * r)
}

/// Exponential atmosphere density model.
pub fn air_density_at(altitude_m: f64) -> f64 {
    SEA_LEVEL_DENSITY_KG_M3 * (-altitude_m / SCALE_HEIGHT_M).exp()
}

/// Aerodynamic drag force magnitude for a vertical speed at a given altitude.
pub fn drag_force(altitude_m: f64, speed_ms: f64) -> f64 {
    0.5 * air_density_at(altitude_m) * speed_ms * speed_ms * DRAG_COEFFICIENT * CROSS_SECTION_AREA_M2
}

/// Net upward force acting on a vehicle of `mass_kg`.
pub fn net_force(thrust_n: f64, mass_kg: f64, altitude_m: f64, speed_ms: f64) -> f64 {
    thrust_n - mass_kg * gravity_at(altitude_m) - drag_force(altitude_m, speed_ms)
}
