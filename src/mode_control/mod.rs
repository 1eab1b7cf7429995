//! The mission phase state machine.
//!
//! A mission moves strictly forward through [`Stage::PreLaunch`],
//! [`Stage::AscentStage1`] and [`Stage::AscentStage2`] before it ends in success or
//! failure. Each stage owns its failure injection and reports back to the
//! controller through an [`ExitSignal`] instead of mutating the controller.

mod failure_odds;
mod signal;
mod stage;

pub use failure_odds::FailureOdds;
pub use signal::{ExitSignal, FailureReason, MissionEvent};
pub use stage::{Stage, StageContext};
