//! Mission orchestration: the controller owning flight state and stage, status
//! fan-out to observers and the background runner pacing the simulation.

mod mission_controller;
mod mission_error;
mod mission_outcome;
mod sim_runner;
mod status_hub;

pub use mission_controller::MissionController;
pub use mission_error::MissionControlError;
pub use mission_outcome::MissionOutcome;
pub use sim_runner::SimRunner;
pub use status_hub::ObserverId;
