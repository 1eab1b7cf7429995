use super::{
    failure_odds::FailureOdds,
    signal::{ExitSignal, FailureReason, MissionEvent},
};
use crate::flight_control::{FlightState, VehicleConfig};
use rand::RngCore;
use strum_macros::{Display, EnumIter};

/// Phase of the mission. Stages carry no data of their own, everything they act
/// on is lent to them through a [`StageContext`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Stage {
    #[strum(serialize = "Pre-Launch")]
    PreLaunch,
    #[strum(serialize = "Stage 1")]
    AscentStage1,
    #[strum(serialize = "Stage 2")]
    AscentStage2,
}

/// Everything a stage may touch during a single invocation.
pub struct StageContext<'a> {
    pub flight: &'a mut FlightState,
    pub config: &'a VehicleConfig,
    pub odds: &'a FailureOdds,
    pub rng: &'a mut dyn RngCore,
    /// One-off events raised during the invocation, in order.
    pub events: &'a mut Vec<MissionEvent>,
}

impl Stage {
    /// Stage counter as reported in status lines.
    pub fn number(self) -> u8 {
        match self {
            Stage::PreLaunch => 0,
            Stage::AscentStage1 => 1,
            Stage::AscentStage2 => 2,
        }
    }

    /// Runs the stage logic once.
    ///
    /// For [`Stage::PreLaunch`] this is one round of system checks. Both ascent
    /// stages integrate one tick of flight first and then decide on failures,
    /// separation or success.
    pub fn execute_logic(self, ctx: &mut StageContext<'_>) -> ExitSignal {
        match self {
            Stage::PreLaunch => {
                if self.check_failure(ctx) {
                    return ExitSignal::Failure(FailureReason::SystemMalfunction);
                }
                ctx.events.push(MissionEvent::SystemsGo);
                ExitSignal::ChecksPassed
            }
            Stage::AscentStage1 => {
                ctx.flight.tick(ctx.config);
                if self.check_failure(ctx) {
                    return ExitSignal::Failure(FailureReason::EngineFlameout);
                }
                if ctx.flight.is_separation_pending() {
                    ctx.flight.separate_stage(ctx.config);
                    ctx.events.push(MissionEvent::StageSeparation);
                    return ExitSignal::Transition(Stage::AscentStage2);
                }
                if ctx.flight.is_mission_active() {
                    ExitSignal::Continue
                } else {
                    ExitSignal::Failure(FailureReason::Stage1NonOperational)
                }
            }
            Stage::AscentStage2 => {
                ctx.flight.tick(ctx.config);
                self.check_failure(ctx);
                if ctx.flight.targets_met(ctx.config) {
                    ctx.events.push(MissionEvent::OrbitAchieved);
                    return ExitSignal::Success;
                }
                if ctx.flight.is_mission_active() {
                    ExitSignal::Continue
                } else {
                    ExitSignal::Failure(FailureReason::Stage2NonOperational)
                }
            }
        }
    }

    /// Rolls the stage specific failure. Returns `true` only for fatal failures,
    /// a stage 2 fuel leak is applied to the flight state and reported as an
    /// event instead.
    pub fn check_failure(self, ctx: &mut StageContext<'_>) -> bool {
        match self {
            Stage::PreLaunch => FailureOdds::roll(ctx.odds.pre_launch(), ctx.rng),
            Stage::AscentStage1 => FailureOdds::roll(ctx.odds.flameout(), ctx.rng),
            Stage::AscentStage2 => {
                if !ctx.flight.is_fuel_leak_active()
                    && FailureOdds::roll(ctx.odds.fuel_leak(), ctx.rng)
                    && ctx.flight.activate_fuel_leak()
                {
                    ctx.events.push(MissionEvent::FuelLeak);
                }
                false
            }
        }
    }
}
