use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Callback receiving formatted status lines. Runs on whichever task
/// triggered the notification, so it must return promptly.
pub type StatusObserver = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned on subscription, used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observer registry with the notification policy of a mission.
///
/// Regular statuses are only forwarded when they differ from the last line
/// emitted. One-off events are always forwarded, and the terminal status goes
/// out exactly once per mission.
#[derive(Default)]
pub struct StatusHub {
    observers: Vec<(ObserverId, StatusObserver)>,
    next_id: u64,
    last_emitted: Option<String>,
    terminal_emitted: bool,
}

impl StatusHub {
    pub fn subscribe(&mut self, observer: StatusObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(obs_id, _)| *obs_id != id);
        before != self.observers.len()
    }

    pub fn observer_count(&self) -> usize { self.observers.len() }

    /// Forwards an active status unless it repeats the previous line.
    pub fn publish_status(&mut self, status: String) {
        if self.last_emitted.as_deref() == Some(status.as_str()) {
            return;
        }
        self.emit(status);
    }

    pub fn publish_event(&mut self, message: String) { self.emit(message); }

    /// Forwards the terminal status, once.
    pub fn publish_terminal(&mut self, status: String) {
        if self.terminal_emitted {
            return;
        }
        self.terminal_emitted = true;
        self.emit(status);
    }

    /// Forgets all de-duplication state. Observers stay subscribed.
    pub fn reset(&mut self) {
        self.last_emitted = None;
        self.terminal_emitted = false;
    }

    fn emit(&mut self, message: String) {
        for (_, observer) in &self.observers {
            observer(&message);
        }
        self.last_emitted = Some(message);
    }
}

impl Debug for StatusHub {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusHub")
            .field("observers", &self.observers.len())
            .field("last_emitted", &self.last_emitted)
            .field("terminal_emitted", &self.terminal_emitted)
            .finish()
    }
}
