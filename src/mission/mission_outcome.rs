use crate::{
    flight_control::{FlightState, VehicleConfig},
    mode_control::FailureReason,
};
use std::fmt::{Display, Formatter};

/// Outcome of a mission, derived from the flight state on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    InProgress,
    Success,
    Failure(Option<FailureReason>),
}

impl MissionOutcome {
    const SUCCESS_STATUS: &'static str = "MISSION SUCCESSFUL";
    const FAILURE_STATUS: &'static str = "MISSION FAILED";

    /// A captured failure reason always wins. Without one an ended mission only
    /// counts as successful if both targets are met.
    pub fn derive(
        flight: &FlightState,
        config: &VehicleConfig,
        failure: Option<FailureReason>,
    ) -> Self {
        if flight.is_mission_active() {
            MissionOutcome::InProgress
        } else if failure.is_some() {
            MissionOutcome::Failure(failure)
        } else if flight.targets_met(config) {
            MissionOutcome::Success
        } else {
            MissionOutcome::Failure(None)
        }
    }

    pub fn is_terminal(&self) -> bool { !matches!(self, MissionOutcome::InProgress) }

    /// Status line as fanned out to observers.
    pub fn status_line(&self, flight: &FlightState) -> String {
        match self {
            MissionOutcome::InProgress => format!(
                "Stage: {}, Fuel: {:.1}%, Altitude: {:.1} km, Speed: {:.0} km/h",
                flight.stage(),
                flight.fuel_percent(),
                flight.altitude_km(),
                flight.speed_kmh()
            ),
            terminal => terminal.to_string(),
        }
    }

    /// Whether an observed status line is one of the terminal ones.
    pub fn is_terminal_status(status: &str) -> bool {
        status.starts_with(Self::SUCCESS_STATUS) || status.starts_with(Self::FAILURE_STATUS)
    }
}

impl Display for MissionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionOutcome::InProgress => write!(f, "MISSION IN PROGRESS"),
            MissionOutcome::Success => write!(f, "{}", Self::SUCCESS_STATUS),
            MissionOutcome::Failure(Some(reason)) => write!(f, "{}: {reason}", Self::FAILURE_STATUS),
            MissionOutcome::Failure(None) => write!(f, "{}", Self::FAILURE_STATUS),
        }
    }
}
