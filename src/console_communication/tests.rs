use super::{MissionConsole, MissionLog};
use crate::{
    mission::{MissionController, MissionOutcome},
    mode_control::Stage,
    profile::TomlProfileLoader,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;

const LEO_NO_FAILURES: &str = r#"
initial_mass_kg = 550000.0
fuel_mass_kg = 480000.0
stage1_dry_mass_kg = 25000.0
stage1_thrust_n = 9.0e6
stage2_thrust_n = 1.8e6
stage1_burn_rate_kg_s = 2800.0
stage2_burn_rate_kg_s = 450.0
stage_separation_altitude_m = 70000.0
target_altitude_km = 400.0
target_speed_kmh = 8500.0

[failure_odds]
pre_launch = 0.0
flameout = 0.0
fuel_leak = 0.0
"#;

/// Keeps the background runner from ticking while a scripted session runs.
const IDLE_TICK: Duration = Duration::from_secs(3600);

struct Session {
    dir: TempDir,
    controller: Arc<MissionController>,
}

impl Session {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("leo.toml"), LEO_NO_FAILURES).unwrap();
        let loader = Arc::new(TomlProfileLoader::new(dir.path()));
        let rng = Box::new(StdRng::seed_from_u64(7));
        let controller = Arc::new(MissionController::new(loader, "leo", rng).unwrap());
        Self { dir, controller }
    }

    /// Runs the console over `script` and returns the log records without
    /// their timestamps.
    async fn run(&self, script: &str) -> Vec<String> {
        let log_path = self.dir.path().join("mission_log.txt");
        let log = MissionLog::create(&log_path).await;
        let console = MissionConsole::new(Arc::clone(&self.controller), log, IDLE_TICK).await;
        console.run(script.as_bytes()).await;
        std::fs::read_to_string(&log_path)
            .unwrap()
            .lines()
            .map(|line| line.split_once("] ").unwrap().1.to_string())
            .collect()
    }
}

fn count(records: &[String], record: &str) -> usize {
    records.iter().filter(|r| *r == record).count()
}

#[tokio::test]
async fn test_scripted_mission_reaches_orbit() {
    let session = Session::new();
    let records =
        session.run("start_checks\n\nlaunch\nfast_forward 10000\nstatus\nexit\nlaunch\n").await;

    assert_eq!(records[0], "[INIT] Mission console started with profile 'leo'.");
    assert_eq!(count(&records, "[COMMAND] launch"), 1);
    assert_eq!(count(&records, "[STATUS] All systems are 'Go' for launch."), 1);
    assert_eq!(count(&records, "[STATUS] Launch initiated. T-minus zero!"), 1);
    assert_eq!(
        count(&records, "[STATUS] Stage 1 complete. Separating stage. Entering Stage 2."),
        1
    );
    assert_eq!(count(&records, "[STATUS] Orbit achieved! Mission Successful."), 1);
    // once from the mission itself, once on request
    assert_eq!(count(&records, "[STATUS] MISSION SUCCESSFUL"), 2);
    assert_eq!(
        records.last().unwrap(),
        "[COMMAND] exit received. Simulation terminated by user."
    );
    assert!(records.iter().all(|r| !r.starts_with("[ERROR]")));
    assert_eq!(session.controller.outcome().await, MissionOutcome::Success);
}

#[tokio::test]
async fn test_rejected_commands_are_logged() {
    let session = Session::new();
    let records = session.run("launch\nabort\nfast_forward ten\nfast_forward 5\n").await;

    assert_eq!(
        count(
            &records,
            "[ERROR] Mission Control Error: Pre-launch checks not complete. Type 'start_checks' first."
        ),
        1
    );
    assert_eq!(
        count(&records, "[ERROR] Invalid command 'abort'. Type 'help' for the available commands."),
        1
    );
    assert_eq!(
        count(&records, "[ERROR] Invalid number of seconds for fast_forward: 'ten'."),
        1
    );
    assert_eq!(
        count(&records, "[ERROR] Mission Control Error: Cannot fast_forward before launch."),
        1
    );
    assert_eq!(session.controller.stage().await, Stage::PreLaunch);
    assert!(session.controller.is_mission_active().await);
}

#[tokio::test]
async fn test_reset_starts_over() {
    let session = Session::new();
    let records = session.run("start_checks\nlaunch\nfast_forward 20\nreset\nstatus\n").await;

    assert_eq!(count(&records, "[INIT] Mission reset."), 1);
    assert_eq!(
        records.last().unwrap(),
        "[STATUS] Stage: 0, Fuel: 100.0%, Altitude: 0.0 km, Speed: 0 km/h"
    );
    assert_eq!(session.controller.stage().await, Stage::PreLaunch);
    assert!(!session.controller.checks_complete().await);
    assert_eq!(session.controller.flight_snapshot().await.elapsed_s(), 0);
}

#[tokio::test]
async fn test_failed_reset_keeps_mission() {
    let session = Session::new();
    let script = "start_checks\nlaunch\nfast_forward 3\n";
    session.run(script).await;
    std::fs::remove_file(session.dir.path().join("leo.toml")).unwrap();

    let records = session.run("reset\n").await;
    assert!(records.last().unwrap().starts_with("[ERROR] Profile Error: cannot find profile 'leo'"));
    assert_eq!(session.controller.stage().await, Stage::AscentStage1);
    assert_eq!(session.controller.flight_snapshot().await.elapsed_s(), 3);
}

#[tokio::test]
async fn test_closed_consoles_release_their_observer() {
    let session = Session::new();
    for _ in 0..3 {
        session.run("status\n").await;
    }
    assert_eq!(session.controller.observer_count().await, 0);
}
