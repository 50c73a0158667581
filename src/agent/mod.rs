//! Keep-alive agent
//!
//! One agent owns all per-process state: the confinement miss counter and
//! the movement generator. A tick runs the guard first, then takes the next
//! movement offset. Reporting and submitting are left to the caller, see
//! [`crate::session::dispatch_tick`].

pub mod confinement;
pub mod config;
pub mod report;

pub use config::{AgentConfig, ConfigError, MovementStrategy, MOVEMENT_TIMER_ID};
pub use confinement::{Confinement, ConfinementGuard};
pub use report::report_failure;

use crate::movement::MovementGenerator;
use crate::platform::{Offset, Platform, PlatformResult, TimerId};

pub struct Agent {
    timer: TimerId,
    guard: ConfinementGuard,
    movement: MovementGenerator,
}

impl Agent {
    pub fn new(config: &AgentConfig, timer: TimerId) -> Self {
        Self::with_movement(config, timer, MovementGenerator::from_config(config))
    }

    pub fn with_movement(config: &AgentConfig, timer: TimerId, movement: MovementGenerator) -> Self {
        Self {
            timer,
            guard: ConfinementGuard::new(config.recenter_threshold),
            movement,
        }
    }

    /// Whether `fired` is this agent's movement timer.
    pub fn accepts(&self, fired: TimerId) -> bool {
        fired == self.timer
    }

    /// First half of a tick: keep the cursor over the focused window.
    pub fn confine<P: Platform + ?Sized>(&mut self, platform: &P) -> PlatformResult<Confinement> {
        self.guard.enforce(platform)
    }

    /// Second half of a tick. Advances the movement whether or not the
    /// offset ends up submitted.
    pub fn next_offset(&mut self) -> Offset {
        self.movement.next_offset()
    }
}
