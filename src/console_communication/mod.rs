//! The operator facing side of the simulator: command parsing, the interactive
//! console loop, runtime settings and the durable mission log.

mod command;
mod console_error;
mod console_settings;
mod mission_console;
mod mission_log;
#[cfg(test)]
mod tests;

pub use command::Command;
pub use console_error::ConsoleError;
pub use console_settings::ConsoleSettings;
pub use mission_console::MissionConsole;
pub use mission_log::{LogKind, MissionLog};
