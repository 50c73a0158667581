//! Eight-step "circle" movement
//!
//! Walks a fixed loop of compass offsets. After a full lap the offsets sum to
//! zero, so the cursor traces a tiny octagon instead of wandering off.

use crate::platform::Offset;

/// Number of steps in one lap.
pub const CIRCLE_STEPS: usize = 8;

/// Unit directions in lap order (screen y grows downwards).
const DIRECTIONS: [(i32, i32); CIRCLE_STEPS] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[derive(Debug, Clone)]
pub struct CircleMovement {
    table: [Offset; CIRCLE_STEPS],
    index: usize,
}

impl CircleMovement {
    pub fn new(amplitude: i32) -> Self {
        Self::starting_at(amplitude, 0)
    }

    /// Start the lap at `index` (taken modulo the lap length).
    pub fn starting_at(amplitude: i32, index: usize) -> Self {
        let table = DIRECTIONS.map(|(x, y)| Offset::new(x * amplitude, y * amplitude));
        Self {
            table,
            index: index % CIRCLE_STEPS,
        }
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next_offset(&mut self) -> Offset {
        let offset = self.table[self.index];
        self.index = (self.index + 1) % CIRCLE_STEPS;
        offset
    }
}
