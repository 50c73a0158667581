//! Confinement guard
//!
//! Keeps the cursor over the focused window. A cursor seen outside the
//! window's bounds for `threshold` consecutive ticks is moved back to the
//! middle of the window's client area.

use crate::platform::{Platform, PlatformResult, Point};

/// What one guard pass observed or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confinement {
    /// Nothing has focus, nothing to confine to.
    NoFocusedWindow,
    /// Cursor is over the focused window.
    Inside,
    /// Cursor is outside; this many consecutive misses so far.
    Outside { misses: u32 },
    /// Cursor was moved to this screen position.
    Recentered(Point),
}

#[derive(Debug, Clone)]
pub struct ConfinementGuard {
    misses: u32,
    threshold: u32,
}

impl ConfinementGuard {
    pub fn new(threshold: u32) -> Self {
        Self {
            misses: 0,
            threshold,
        }
    }

    /// Consecutive ticks the cursor has been seen outside the focused window.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Run one pass. A failing platform call ends the pass early and leaves
    /// the miss count as is, so a failed recenter is retried next tick.
    pub fn enforce<P: Platform + ?Sized>(&mut self, platform: &P) -> PlatformResult<Confinement> {
        let Some(window) = platform.focused_window() else {
            return Ok(Confinement::NoFocusedWindow);
        };

        let bounds = platform.window_screen_rect(window)?;
        let cursor = platform.cursor_position()?;

        if bounds.contains(cursor) {
            self.misses = 0;
            return Ok(Confinement::Inside);
        }

        self.misses = self.misses.saturating_add(1);
        if self.misses < self.threshold {
            tracing::trace!("Cursor outside focused window ({} misses)", self.misses);
            return Ok(Confinement::Outside {
                misses: self.misses,
            });
        }

        let client = platform.window_client_rect(window)?;
        let target = platform.client_to_screen(window, client.center())?;
        platform.set_cursor_position(target)?;
        self.misses = 0;

        tracing::debug!("Recentered cursor at ({}, {})", target.x, target.y);
        Ok(Confinement::Recentered(target))
    }
}
