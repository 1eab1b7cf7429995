use super::stage::Stage;
use std::fmt::{Display, Formatter};
use strum_macros::Display;

/// Result of running one stage invocation, applied by the mission controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Continue,
    ChecksPassed,
    Transition(Stage),
    Success,
    Failure(FailureReason),
}

/// Why a mission ended unsuccessfully.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    #[strum(serialize = "system malfunction")]
    SystemMalfunction,
    #[strum(serialize = "catastrophic engine flameout")]
    EngineFlameout,
    #[strum(serialize = "stage 1 non-operational")]
    Stage1NonOperational,
    #[strum(serialize = "stage 2 non-operational")]
    Stage2NonOperational,
}

/// One-off notifications that bypass status de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionEvent {
    SystemsGo,
    Liftoff,
    StageSeparation,
    FuelLeak,
    OrbitAchieved,
    FailureDetected(FailureReason),
}

impl Display for MissionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionEvent::SystemsGo => write!(f, "All systems are 'Go' for launch."),
            MissionEvent::Liftoff => write!(f, "Launch initiated. T-minus zero!"),
            MissionEvent::StageSeparation => {
                write!(f, "Stage 1 complete. Separating stage. Entering Stage 2.")
            }
            MissionEvent::FuelLeak => write!(
                f,
                "WARNING: Fuel Leak Detected! Fuel consumption rate has increased."
            ),
            MissionEvent::OrbitAchieved => write!(f, "Orbit achieved! Mission Successful."),
            MissionEvent::FailureDetected(reason) => write!(f, "Failure detected: {reason}"),
        }
    }
}
