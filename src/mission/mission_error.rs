use thiserror::Error;

/// Usage errors: an operation was requested in a state that does not allow it.
/// Returning one of these never changes the mission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MissionControlError {
    #[error("Checks already completed. Type 'launch' to proceed.")]
    ChecksAlreadyComplete,
    #[error("Pre-launch checks can only be initiated in the Pre-Launch state.")]
    NotInPreLaunch,
    #[error("Pre-launch checks not complete. Type 'start_checks' first.")]
    ChecksIncomplete,
    #[error("Launch already in progress or completed.")]
    AlreadyLaunched,
    #[error("Cannot fast_forward before launch.")]
    NotLaunched,
    #[error("Fast forward duration must be a positive number.")]
    ZeroDuration,
    #[error("The mission has already ended. Type 'reset' to start over.")]
    MissionOver,
}
