//! Failure reporting
//!
//! Showing an error is modal and pumps messages, so a second failure can
//! surface while the first dialog is still open. Only one report may be in
//! flight per thread; nested ones are logged and dropped.

use crate::platform::{Platform, PlatformError};
use std::cell::Cell;

thread_local! {
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Holds the in-flight flag until dropped.
pub struct ReportGuard {
    _private: (),
}

impl ReportGuard {
    /// `None` while another report is being shown on this thread.
    pub fn try_acquire() -> Option<ReportGuard> {
        REPORTING.with(|flag| {
            if flag.get() {
                None
            } else {
                flag.set(true);
                Some(ReportGuard { _private: () })
            }
        })
    }
}

impl Drop for ReportGuard {
    fn drop(&mut self) {
        REPORTING.with(|flag| flag.set(false));
    }
}

/// Log `err` and show it to the user. Returns whether it was shown.
pub fn report_failure<P: Platform + ?Sized>(platform: &P, err: &PlatformError) -> bool {
    report_failure_with(err, |message| platform.report_fatal(message))
}

/// Same as [`report_failure`] for callers that have no [`Platform`] yet,
/// such as window setup.
pub fn report_failure_with(err: &PlatformError, show: impl FnOnce(&str)) -> bool {
    let message = err.user_message();
    tracing::error!(operation = err.operation, code = err.code, "{}", message);

    match ReportGuard::try_acquire() {
        Some(_guard) => {
            show(&message);
            true
        }
        None => {
            tracing::warn!("Suppressed nested failure report for {}", err.operation);
            false
        }
    }
}
