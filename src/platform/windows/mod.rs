//! Windows platform implementation
//!
//! Uses plain Win32: `SendInput` for movement, `SetTimer` on the main window
//! for ticks and `MessageBoxW` for error notifications.

pub mod host;
pub mod input;

pub use host::{show_error, Win32Host};
