use crate::{mission::SimRunner, warn};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Runtime settings of the interactive simulator, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    profile: String,
    profile_dir: PathBuf,
    log_file: PathBuf,
    tick_interval: Duration,
}

impl ConsoleSettings {
    const PROFILE_VAR: &'static str = "ROCKETSIM_PROFILE";
    const PROFILE_DIR_VAR: &'static str = "ROCKETSIM_PROFILE_DIR";
    const LOG_FILE_VAR: &'static str = "ROCKETSIM_LOG_FILE";
    const TICK_MS_VAR: &'static str = "ROCKETSIM_TICK_MS";

    const DEFAULT_PROFILE: &'static str = "leo";
    const DEFAULT_PROFILE_DIR: &'static str = "./profiles";
    const DEFAULT_LOG_FILE: &'static str = "mission_log.txt";

    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Builds the settings from an arbitrary variable lookup. Unset or empty
    /// variables fall back to their defaults, so does an unusable tick length.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let tick_interval = match var(Self::TICK_MS_VAR).map(|v| v.trim().parse::<u64>()) {
            None => SimRunner::DEFAULT_INTERVAL,
            Some(Ok(ms)) if ms > 0 => Duration::from_millis(ms),
            Some(_) => {
                warn!(
                    "{} must be a positive number of milliseconds, using {}ms.",
                    Self::TICK_MS_VAR,
                    SimRunner::DEFAULT_INTERVAL.as_millis()
                );
                SimRunner::DEFAULT_INTERVAL
            }
        };
        Self {
            profile: var(Self::PROFILE_VAR).unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string()),
            profile_dir: var(Self::PROFILE_DIR_VAR)
                .map_or_else(|| PathBuf::from(Self::DEFAULT_PROFILE_DIR), PathBuf::from),
            log_file: var(Self::LOG_FILE_VAR)
                .map_or_else(|| PathBuf::from(Self::DEFAULT_LOG_FILE), PathBuf::from),
            tick_interval,
        }
    }

    pub fn profile(&self) -> &str { &self.profile }
    pub fn profile_dir(&self) -> &Path { &self.profile_dir }
    pub fn log_file(&self) -> &Path { &self.log_file }
    pub fn tick_interval(&self) -> Duration { self.tick_interval }
}
