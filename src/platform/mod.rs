//! Platform collaborator interface
//!
//! The agent never talks to the OS directly. It asks a [`Platform`] for the
//! focused window, the cursor and input injection, and a [`Host`] for the
//! periodic timer and the event stream that delivers it.

pub mod error;
pub mod types;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(test)]
pub(crate) mod fake;

use std::time::Duration;

pub use error::{PlatformError, PlatformResult};
pub use types::{Offset, Point, Rect, TimerId, WindowHandle};

/// Window, cursor and input primitives used on every tick.
pub trait Platform {
    /// The window currently holding input focus, if any.
    fn focused_window(&self) -> Option<WindowHandle>;

    /// Outer bounds of `window` in screen coordinates.
    fn window_screen_rect(&self, window: WindowHandle) -> PlatformResult<Rect>;

    /// Client area of `window` in its own client coordinates.
    fn window_client_rect(&self, window: WindowHandle) -> PlatformResult<Rect>;

    fn cursor_position(&self) -> PlatformResult<Point>;

    fn set_cursor_position(&self, position: Point) -> PlatformResult<()>;

    fn client_to_screen(&self, window: WindowHandle, point: Point) -> PlatformResult<Point>;

    /// Queue one relative pointer move. With `no_coalesce` the OS must not
    /// merge it with other pending moves.
    fn submit_relative_move(&self, offset: Offset, no_coalesce: bool) -> PlatformResult<()>;

    /// Show an error to the user. Blocks until dismissed.
    fn report_fatal(&self, message: &str);
}

/// What the host's event source produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A timer fired and the host left it to the caller.
    Timer(TimerId),
    /// Some other event was handled by the host itself.
    Dispatched,
    /// The event loop ended with this exit code.
    Quit(i32),
    /// The event source broke. The loop ends with `exit_code`.
    Failed {
        error: PlatformError,
        exit_code: i32,
    },
}

/// Timer registration and the single-threaded event loop.
pub trait Host: Platform {
    fn create_periodic_timer(&self, id: TimerId, period: Duration) -> PlatformResult<TimerId>;

    fn cancel_timer(&self, id: TimerId);

    /// Wait for and handle the next event. A host may run timer ticks itself
    /// through [`crate::session::dispatch_tick`], including from inside
    /// nested modal loops, and report them as [`HostEvent::Dispatched`].
    fn next_event(&self) -> HostEvent;
}
