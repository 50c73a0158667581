//! Event loop driver
//!
//! Registers the movement timer, installs the agent for this thread and pumps
//! the host until it quits, then cancels the timer. Ticks may arrive from the
//! loop here or from a modal loop the host runs while showing an error, so
//! the agent lives in a thread-local slot rather than on this stack frame.

use crate::agent::{report_failure, Agent, AgentConfig, Confinement, MOVEMENT_TIMER_ID};
use crate::platform::{Host, HostEvent, Offset, Platform, TimerId};
use std::cell::RefCell;

/// Exit status when the movement timer cannot be set up.
pub const FAILURE_EXIT_CODE: i32 = -1;

thread_local! {
    static AGENT: RefCell<Option<Agent>> = const { RefCell::new(None) };
}

/// Keeps an agent installed in this thread's slot until dropped.
struct InstalledAgent {
    _private: (),
}

impl InstalledAgent {
    fn install(agent: Agent) -> Self {
        AGENT.with(|slot| *slot.borrow_mut() = Some(agent));
        InstalledAgent { _private: () }
    }
}

impl Drop for InstalledAgent {
    fn drop(&mut self) {
        AGENT.with(|slot| {
            if let Ok(mut slot) = slot.try_borrow_mut() {
                slot.take();
            }
        });
    }
}

/// Result of handling one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No agent is installed, or the tick was for another timer.
    Ignored,
    /// The tick ran. `moved` is the offset submitted, if submission worked.
    Ran {
        confinement: Option<Confinement>,
        moved: Option<Offset>,
    },
}

/// Run one tick of the installed agent for timer `fired`.
///
/// The agent is never borrowed while a failure is being reported, so a tick
/// delivered from inside the error dialog still runs. Its own failures are
/// then dropped by the in-flight report guard.
pub fn dispatch_tick<P: Platform + ?Sized>(platform: &P, fired: TimerId) -> TickOutcome {
    let confined = AGENT.with(|slot| {
        let mut slot = slot.try_borrow_mut().ok()?;
        let agent = slot.as_mut()?;
        if !agent.accepts(fired) {
            tracing::debug!("Ignoring event from foreign timer {}", fired);
            return None;
        }
        Some(agent.confine(platform))
    });
    let Some(confined) = confined else {
        return TickOutcome::Ignored;
    };

    let confinement = match confined {
        Ok(confinement) => Some(confinement),
        Err(err) => {
            report_failure(platform, &err);
            None
        }
    };

    let offset = AGENT.with(|slot| {
        let mut slot = slot.try_borrow_mut().ok()?;
        slot.as_mut().map(Agent::next_offset)
    });
    let moved = offset.and_then(|offset| match platform.submit_relative_move(offset, true) {
        Ok(()) => Some(offset),
        Err(err) => {
            report_failure(platform, &err);
            None
        }
    });

    tracing::trace!(?confinement, ?moved, "Tick");
    TickOutcome::Ran { confinement, moved }
}

/// Run the agent on `host` until its event loop ends. Returns the exit code.
pub fn run_session<H: Host + ?Sized>(host: &H, config: &AgentConfig) -> i32 {
    let timer = match host.create_periodic_timer(MOVEMENT_TIMER_ID, config.tick_period()) {
        Ok(timer) => timer,
        Err(err) => {
            report_failure(host, &err);
            return FAILURE_EXIT_CODE;
        }
    };

    tracing::info!(
        "Movement timer {} started (period={:?}, strategy={:?})",
        timer,
        config.tick_period(),
        config.strategy
    );

    let installed = InstalledAgent::install(Agent::new(config, timer));
    let (failure, code) = loop {
        match host.next_event() {
            HostEvent::Timer(fired) => {
                dispatch_tick(host, fired);
            }
            HostEvent::Dispatched => {}
            HostEvent::Quit(code) => break (None, code),
            HostEvent::Failed { error, exit_code } => break (Some(error), exit_code),
        }
    };

    host.cancel_timer(timer);
    drop(installed);

    if let Some(err) = failure {
        report_failure(host, &err);
    }
    tracing::info!("Event loop finished (exit code {})", code);
    code
}
