//! Vehicle configuration and the one-second flight model of the launch vehicle.

mod flight_state;
mod physics;
mod vehicle_config;
#[cfg(test)]
mod tests;

pub use flight_state::FlightState;
pub use vehicle_config::VehicleConfig;
