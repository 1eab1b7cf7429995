#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console_communication;
mod flight_control;
mod logger;
mod mission;
mod mode_control;
mod profile;

use crate::console_communication::{ConsoleSettings, LogKind, MissionConsole, MissionLog};
use crate::mission::MissionController;
use crate::profile::TomlProfileLoader;
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let settings = ConsoleSettings::from_env();
    let mut mission_log = MissionLog::create(settings.log_file()).await;

    let loader = TomlProfileLoader::new(settings.profile_dir());
    match loader.available() {
        Ok(names) => info!("Profiles in {}: {}", loader.dir().display(), names.join(", ")),
        Err(e) => warn!("Cannot list profiles in {}: {e}", loader.dir().display()),
    }

    let rng = Box::new(StdRng::from_os_rng());
    let controller = match MissionController::new(Arc::new(loader), settings.profile(), rng) {
        Ok(controller) => Arc::new(controller),
        Err(e) => {
            let message = format!("Could not load profile '{}': {e}", settings.profile());
            mission_log.record(LogKind::Error, &message).await;
            fatal!("{message}");
        }
    };

    let console = MissionConsole::new(controller, mission_log, settings.tick_interval()).await;
    console.run(BufReader::new(tokio::io::stdin())).await;
}
