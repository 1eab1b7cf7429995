use super::{Command, ConsoleError, LogKind, MissionLog};
use crate::{
    info,
    mission::{MissionController, MissionOutcome, ObserverId, SimRunner},
    mode_control::MissionEvent,
};
use std::{ops::ControlFlow, sync::Arc, time::Duration};
use strum::IntoEnumIterator;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};

/// Interactive command loop in front of a [`MissionController`].
///
/// Status lines reach the console through a channel fed by an observer, so
/// they are printed and logged in the order the mission produced them. While a
/// command executes the background runner is held, afterwards it resumes.
pub struct MissionConsole {
    controller: Arc<MissionController>,
    log: MissionLog,
    tick_interval: Duration,
    runner: Option<SimRunner>,
    observer: ObserverId,
    status_rx: mpsc::UnboundedReceiver<String>,
}

impl MissionConsole {
    pub async fn new(
        controller: Arc<MissionController>,
        log: MissionLog,
        tick_interval: Duration,
    ) -> Self {
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        let observer = controller
            .subscribe(move |status| {
                // closed only once the console is gone
                let _ = status_tx.send(status.to_string());
            })
            .await;
        Self { controller, log, tick_interval, runner: None, observer, status_rx }
    }

    /// Reads commands from `input` until `exit` or end of input.
    pub async fn run<R>(mut self, input: R)
    where R: AsyncBufRead + Unpin {
        let profile = self.controller.profile().to_string();
        let greeting = format!("Mission console started with profile '{profile}'.");
        self.log.record(LogKind::Init, &greeting).await;
        Self::print_banner(&profile);

        let mut lines = input.lines();
        loop {
            tokio::select! {
                biased;
                Some(status) = self.status_rx.recv() => self.on_status(status).await,
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if self.handle_line(line.trim()).await.is_break() {
                            break;
                        }
                    }
                    Ok(None) => {
                        info!("Input closed.");
                        break;
                    }
                    Err(e) => {
                        let message = format!("Reading input failed: {e}");
                        self.log.record(LogKind::Error, &message).await;
                        break;
                    }
                },
            }
        }
        self.shutdown().await;
    }

    async fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        if line.is_empty() {
            return ControlFlow::Continue(());
        }
        self.log.record(LogKind::Command, line).await;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.report(&e).await;
                return ControlFlow::Continue(());
            }
        };
        if command == Command::Exit {
            let farewell = "exit received. Simulation terminated by user.";
            self.log.record(LogKind::Command, farewell).await;
            return ControlFlow::Break(());
        }

        if let Some(runner) = &self.runner {
            runner.pause();
        }
        if let Err(e) = self.execute(command).await {
            self.report(&e).await;
        }
        if let Some(runner) = &self.runner {
            runner.resume();
        }
        ControlFlow::Continue(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), ConsoleError> {
        match command {
            Command::StartChecks => self.controller.initiate_checks().await?,
            Command::Launch => {
                self.controller.launch().await?;
                self.stop_runner().await;
                self.runner =
                    Some(SimRunner::start(Arc::clone(&self.controller), self.tick_interval));
            }
            Command::FastForward(secs) => {
                let ticks = self.controller.fast_forward(secs).await?;
                println!("Fast forwarded {ticks}s.");
            }
            Command::Status => {
                let status = self.controller.status().await;
                println!("-> {status}");
                self.log.record(LogKind::Status, &status).await;
            }
            Command::Reset => {
                self.stop_runner().await;
                self.controller.reset().await?;
                println!("Mission reset. Type 'start_checks' to begin.");
                self.log.record(LogKind::Init, "Mission reset.").await;
            }
            Command::Help => Self::print_help(),
            Command::Exit => {}
        }
        Ok(())
    }

    async fn on_status(&mut self, status: String) {
        println!("-> {status}");
        let kind = if status.starts_with(MissionEvent::FuelLeak.to_string().as_str()) {
            LogKind::Warning
        } else {
            LogKind::Status
        };
        self.log.record(kind, &status).await;
        if MissionOutcome::is_terminal_status(&status) {
            self.stop_runner().await;
            println!("Mission ended. Type 'reset' to fly again or 'exit' to quit.");
        }
    }

    async fn report(&mut self, e: &ConsoleError) {
        println!("!!! {e}");
        self.log.record(LogKind::Error, &e.to_string()).await;
    }

    async fn stop_runner(&mut self) {
        if let Some(runner) = self.runner.take() {
            runner.stop();
            runner.join().await;
        }
    }

    async fn shutdown(&mut self) {
        self.stop_runner().await;
        self.controller.unsubscribe(self.observer).await;
        while let Ok(status) = self.status_rx.try_recv() {
            self.on_status(status).await;
        }
        println!("Simulation terminated. See '{}' for the mission log.", self.log.path().display());
    }

    fn print_banner(profile: &str) {
        println!("\n--- Rocket Launch Simulator ({profile} profile) ---");
        Self::print_help();
    }

    fn print_help() {
        println!("Available commands:");
        for command in Command::iter() {
            println!("  {}", command.usage());
        }
    }
}
