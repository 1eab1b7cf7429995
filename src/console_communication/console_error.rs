use crate::{mission::MissionControlError, profile::ProfileError};
use thiserror::Error;

/// Anything that can go wrong while handling one line of operator input.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Mission Control Error: {0}")]
    Mission(#[from] MissionControlError),
    #[error("Profile Error: {0}")]
    Profile(#[from] ProfileError),
    #[error("Invalid command '{0}'. Type 'help' for the available commands.")]
    UnknownCommand(String),
    #[error("Invalid number of seconds for fast_forward: '{0}'.")]
    InvalidDuration(String),
}
