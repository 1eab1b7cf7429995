use super::{
    mission_error::MissionControlError,
    mission_outcome::MissionOutcome,
    status_hub::{ObserverId, StatusHub},
};
use crate::{
    flight_control::{FlightState, VehicleConfig},
    info, log,
    mode_control::{ExitSignal, FailureOdds, FailureReason, MissionEvent, Stage, StageContext},
    profile::{ProfileError, ProfileSource},
    warn,
};
use rand::RngCore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything that changes during a mission, guarded by a single lock so ticks
/// never interleave and observers never see a half-updated state.
struct MissionCore {
    config: VehicleConfig,
    odds: FailureOdds,
    flight: FlightState,
    stage: Stage,
    checks_complete: bool,
    failure: Option<FailureReason>,
    rng: Box<dyn RngCore + Send>,
    hub: StatusHub,
}

impl MissionCore {
    fn new(config: VehicleConfig, odds: FailureOdds, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            flight: FlightState::new(&config),
            config,
            odds,
            stage: Stage::PreLaunch,
            checks_complete: false,
            failure: None,
            rng,
            hub: StatusHub::default(),
        }
    }

    fn outcome(&self) -> MissionOutcome {
        MissionOutcome::derive(&self.flight, &self.config, self.failure)
    }

    fn status(&self) -> String { self.outcome().status_line(&self.flight) }

    /// Runs the active stage once and applies what it reports.
    fn run_stage(&mut self) {
        let mut events = Vec::new();
        let signal = {
            let mut ctx = StageContext {
                flight: &mut self.flight,
                config: &self.config,
                odds: &self.odds,
                rng: self.rng.as_mut(),
                events: &mut events,
            };
            self.stage.execute_logic(&mut ctx)
        };
        for event in events {
            self.hub.publish_event(event.to_string());
        }
        match signal {
            ExitSignal::Continue => {}
            ExitSignal::ChecksPassed => {
                self.checks_complete = true;
                info!("Pre-launch checks passed.");
                return;
            }
            ExitSignal::Transition(next) => {
                log!("T+{}s: {} -> {next}", self.flight.elapsed_s(), self.stage);
                self.stage = next;
                if !self.flight.is_mission_active() {
                    self.fail(FailureReason::Stage2NonOperational);
                }
            }
            ExitSignal::Success => {
                self.flight.deactivate();
                info!("Orbit achieved after {}s.", self.flight.elapsed_s());
            }
            ExitSignal::Failure(reason) => self.fail(reason),
        }
        self.publish_status();
    }

    /// Captures the failure reason and ends the mission. A mission fails at most once.
    fn fail(&mut self, reason: FailureReason) {
        if self.failure.is_some() {
            return;
        }
        self.failure = Some(reason);
        self.flight.deactivate();
        warn!("MISSION FAILED in {}: {reason}", self.stage);
        self.hub.publish_event(MissionEvent::FailureDetected(reason).to_string());
    }

    fn publish_status(&mut self) {
        let outcome = self.outcome();
        let line = outcome.status_line(&self.flight);
        if outcome.is_terminal() {
            self.hub.publish_terminal(line);
        } else {
            self.hub.publish_status(line);
        }
    }

    /// Runs up to `n` ticks and stops at the first one ending the mission.
    fn advance(&mut self, n: u32) -> u32 {
        let mut ticks = 0;
        while ticks < n && self.flight.is_mission_active() && self.stage != Stage::PreLaunch {
            self.run_stage();
            ticks += 1;
        }
        ticks
    }
}

/// Owner of the flight state and the active stage of one mission.
///
/// Every operation takes the mission lock exactly once, so the interactive
/// caller and a [`SimRunner`](super::SimRunner) can share the controller.
/// Observers are invoked while that lock is held and must not call back into
/// the controller.
pub struct MissionController {
    core: Mutex<MissionCore>,
    source: Arc<dyn ProfileSource>,
    profile: String,
}

impl MissionController {
    /// Builds a mission from the named profile.
    ///
    /// # Errors
    /// Any [`ProfileError`] of the source or of profile validation.
    pub fn new(
        source: Arc<dyn ProfileSource>,
        profile: impl Into<String>,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, ProfileError> {
        let profile = profile.into();
        let (config, odds) = source.load(&profile)?.into_parts()?;
        info!("Mission initialised from profile '{profile}'.");
        Ok(Self { core: Mutex::new(MissionCore::new(config, odds, rng)), source, profile })
    }

    pub fn profile(&self) -> &str { &self.profile }

    /// Runs the pre-launch checks once.
    ///
    /// A malfunction ends the mission and is reported to observers, it is not
    /// an error of this call.
    pub async fn initiate_checks(&self) -> Result<(), MissionControlError> {
        let mut core = self.core.lock().await;
        if !core.flight.is_mission_active() {
            return Err(MissionControlError::MissionOver);
        }
        if core.stage != Stage::PreLaunch {
            warn!("Pre-launch checks requested in {}.", core.stage);
            return Err(MissionControlError::NotInPreLaunch);
        }
        if core.checks_complete {
            warn!("Pre-launch checks requested again.");
            return Err(MissionControlError::ChecksAlreadyComplete);
        }
        info!("Initiating pre-launch checks...");
        core.run_stage();
        Ok(())
    }

    /// Lifts off into stage 1. Starting a runner afterwards is up to the caller.
    pub async fn launch(&self) -> Result<(), MissionControlError> {
        let mut core = self.core.lock().await;
        if !core.flight.is_mission_active() {
            return Err(MissionControlError::MissionOver);
        }
        if !core.checks_complete {
            return Err(MissionControlError::ChecksIncomplete);
        }
        if core.stage != Stage::PreLaunch {
            return Err(MissionControlError::AlreadyLaunched);
        }
        core.flight.ignite();
        core.stage = Stage::AscentStage1;
        info!("Launch initiated. Entering {}.", core.stage);
        core.hub.publish_event(MissionEvent::Liftoff.to_string());
        Ok(())
    }

    /// Advances the mission by up to `n` ticks in one critical section and
    /// returns how many ran. Nothing runs before launch or after the mission
    /// ended.
    pub async fn advance(&self, n: u32) -> u32 { self.core.lock().await.advance(n) }

    /// Caller facing form of [`MissionController::advance`] that rejects
    /// requests which could never run a tick.
    pub async fn fast_forward(&self, secs: u32) -> Result<u32, MissionControlError> {
        let mut core = self.core.lock().await;
        if secs == 0 {
            return Err(MissionControlError::ZeroDuration);
        }
        if !core.flight.is_mission_active() {
            return Err(MissionControlError::MissionOver);
        }
        if core.stage == Stage::PreLaunch {
            return Err(MissionControlError::NotLaunched);
        }
        let ticks = core.advance(secs);
        log!("Fast forwarded {ticks}s of {secs}s requested.");
        Ok(ticks)
    }

    /// Rebuilds the mission from a freshly loaded profile. Observers stay
    /// subscribed, every other piece of state starts over.
    ///
    /// # Errors
    /// On a [`ProfileError`] the current mission is left untouched.
    pub async fn reset(&self) -> Result<(), ProfileError> {
        let (config, odds) = self.source.load(&self.profile)?.into_parts()?;
        let mut core = self.core.lock().await;
        core.flight = FlightState::new(&config);
        core.config = config;
        core.odds = odds;
        core.stage = Stage::PreLaunch;
        core.checks_complete = false;
        core.failure = None;
        core.hub.reset();
        info!("Mission reset from profile '{}'.", self.profile);
        Ok(())
    }

    pub async fn subscribe<F>(&self, observer: F) -> ObserverId
    where F: Fn(&str) + Send + Sync + 'static {
        self.core.lock().await.hub.subscribe(Arc::new(observer))
    }

    pub async fn unsubscribe(&self, id: ObserverId) -> bool {
        self.core.lock().await.hub.unsubscribe(id)
    }

    pub async fn observer_count(&self) -> usize { self.core.lock().await.hub.observer_count() }

    /// Current status line, without notifying anyone.
    pub async fn status(&self) -> String { self.core.lock().await.status() }

    pub async fn outcome(&self) -> MissionOutcome { self.core.lock().await.outcome() }

    pub async fn flight_snapshot(&self) -> FlightState { self.core.lock().await.flight.clone() }

    pub async fn stage(&self) -> Stage { self.core.lock().await.stage }

    pub async fn checks_complete(&self) -> bool { self.core.lock().await.checks_complete }

    pub async fn is_mission_active(&self) -> bool {
        self.core.lock().await.flight.is_mission_active()
    }

}
