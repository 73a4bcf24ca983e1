use serde::{Deserialize, Serialize};

/// Screen wake lock as last reported by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WakeLockState {
    /// The client holds the lock.
    Held,
    /// The platform refused or does not support the lock. The game stays
    /// playable, the screen may just turn off.
    #[default]
    Unavailable,
    /// The system took the lock back, e.g. when the tab was hidden.
    ReleasedBySystem,
}

/// Tracks the wake lock for one session. Nothing in the game reads it.
#[derive(Debug, Default, Clone)]
pub struct WakeLock {
    state: WakeLockState,
}

impl WakeLock {
    pub fn state(&self) -> WakeLockState {
        self.state
    }

    /// Record a report from the client. Returns true if the state changed.
    pub fn report(&mut self, state: WakeLockState) -> bool {
        if self.state == state {
            return false;
        }

        match state {
            WakeLockState::Held => tracing::debug!("Screen wake lock acquired"),
            WakeLockState::Unavailable => {
                tracing::warn!("Screen wake lock unavailable; the screen may turn off")
            }
            WakeLockState::ReleasedBySystem => tracing::debug!("Screen wake lock released by system"),
        }

        self.state = state;
        true
    }
}
