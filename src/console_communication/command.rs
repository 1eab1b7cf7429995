use super::ConsoleError;
use regex::Regex;
use std::{str::FromStr, sync::LazyLock};
use strum_macros::{Display, EnumIter};

/// Matches `fast_forward` with an optional argument, e.g. `"FAST_FORWARD 30"`.
static FF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^fast_forward(?:\s+(\S+))?$").unwrap());

/// One line of operator input.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    StartChecks,
    Launch,
    FastForward(u32),
    Status,
    Reset,
    Help,
    Exit,
}

impl Command {
    pub fn usage(self) -> &'static str {
        match self {
            Command::StartChecks => "start_checks      run the pre-launch checks",
            Command::Launch => "launch            lift off after successful checks",
            Command::FastForward(_) => "fast_forward <N>  skip N seconds of flight",
            Command::Status => "status            print the current status",
            Command::Reset => "reset             reload the profile and start over",
            Command::Help => "help              show this list",
            Command::Exit => "exit              quit the simulator",
        }
    }
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Some(caps) = FF_REGEX.captures(input) {
            let arg = caps.get(1).map_or("", |m| m.as_str());
            return arg
                .parse()
                .map(Command::FastForward)
                .map_err(|_| ConsoleError::InvalidDuration(arg.to_string()));
        }
        match input.to_ascii_lowercase().as_str() {
            "start_checks" => Ok(Command::StartChecks),
            "launch" => Ok(Command::Launch),
            "status" => Ok(Command::Status),
            "reset" => Ok(Command::Reset),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(ConsoleError::UnknownCommand(input.to_string())),
        }
    }
}
