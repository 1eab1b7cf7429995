//! Loading of named vehicle profiles.
//!
//! A profile is a TOML document describing one vehicle and its mission
//! targets. The simulation core only ever sees the validated
//! [`VehicleConfig`](crate::flight_control::VehicleConfig) built from it.

mod profile_error;
mod profile_loader;
mod vehicle_profile;

pub use profile_error::ProfileError;
pub use profile_loader::{ProfileSource, TomlProfileLoader};
pub use vehicle_profile::VehicleProfile;
