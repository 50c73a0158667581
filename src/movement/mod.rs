//! Movement generation
//!
//! Produces the relative offset submitted on each tick. The strategy is picked
//! once from the agent configuration and never changes while running.

pub mod circle;
pub mod jitter;

pub use circle::{CircleMovement, CIRCLE_STEPS};
pub use jitter::JitterMovement;

use crate::agent::config::{AgentConfig, MovementStrategy};
use crate::platform::Offset;

#[derive(Debug, Clone)]
pub enum MovementGenerator {
    Circle(CircleMovement),
    Jitter(JitterMovement),
}

impl MovementGenerator {
    pub fn from_config(config: &AgentConfig) -> Self {
        match config.strategy {
            MovementStrategy::Circle => Self::Circle(CircleMovement::new(config.amplitude)),
            MovementStrategy::Jitter => Self::Jitter(JitterMovement::new(config.amplitude)),
        }
    }

    pub fn next_offset(&mut self) -> Offset {
        match self {
            Self::Circle(circle) => circle.next_offset(),
            Self::Jitter(jitter) => jitter.next_offset(),
        }
    }
}
