//! Scripted in-memory platform for tests.

use super::{
    Host, HostEvent, Offset, Platform, PlatformError, PlatformResult, Point, Rect, TimerId,
    WindowHandle,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    FocusedWindow,
    WindowScreenRect(WindowHandle),
    WindowClientRect(WindowHandle),
    CursorPosition,
    SetCursorPosition(Point),
    ClientToScreen(WindowHandle, Point),
    SubmitRelativeMove(Offset, bool),
    ReportFatal(String),
    CreateTimer(TimerId, Duration),
    CancelTimer(TimerId),
    NextEvent,
}

pub(crate) const FOCUSED: WindowHandle = WindowHandle(0x1234);

pub(crate) struct FakePlatform {
    pub focused: Cell<Option<WindowHandle>>,
    pub screen_rect: Cell<Rect>,
    pub client_rect: Cell<Rect>,
    /// Screen position of the focused window's client origin.
    pub client_origin: Cell<Point>,
    pub cursor: Cell<Point>,
    /// Operation names that fail when called.
    pub failing: RefCell<HashSet<&'static str>>,
    pub events: RefCell<VecDeque<HostEvent>>,
    /// When set, `report_fatal` tries to report again from inside the dialog.
    pub reenter_on_report: Cell<bool>,
    /// When set, the next `report_fatal` delivers this timer tick from inside
    /// the dialog, the way a modal loop does.
    pub tick_on_report: Cell<Option<TimerId>>,
    pub nested_report_shown: Cell<Option<bool>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakePlatform {
    /// Focused window at (0,0)-(800,600) whose client origin sits at (8,31).
    pub fn new() -> Self {
        Self {
            focused: Cell::new(Some(FOCUSED)),
            screen_rect: Cell::new(Rect::new(0, 0, 800, 600)),
            client_rect: Cell::new(Rect::new(0, 0, 784, 561)),
            client_origin: Cell::new(Point::new(8, 31)),
            cursor: Cell::new(Point::new(400, 300)),
            failing: RefCell::new(HashSet::new()),
            events: RefCell::new(VecDeque::new()),
            reenter_on_report: Cell::new(false),
            tick_on_report: Cell::new(None),
            nested_report_shown: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn fail(&self, operation: &'static str) {
        self.failing.borrow_mut().insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failing.borrow_mut().remove(operation);
    }

    pub fn push_event(&self, event: HostEvent) {
        self.events.borrow_mut().push_back(event);
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(*call)).count()
    }

    pub fn reports(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::ReportFatal(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn cursor_sets(&self) -> Vec<Point> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::SetCursorPosition(point) => Some(*point),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, operation: &'static str) -> PlatformResult<()> {
        if self.failing.borrow().contains(operation) {
            Err(PlatformError::new(operation, 5).with_description("Access is denied."))
        } else {
            Ok(())
        }
    }
}

impl Platform for FakePlatform {
    fn focused_window(&self) -> Option<WindowHandle> {
        self.record(Call::FocusedWindow);
        self.focused.get()
    }

    fn window_screen_rect(&self, window: WindowHandle) -> PlatformResult<Rect> {
        self.record(Call::WindowScreenRect(window));
        self.check("GetWindowRect")?;
        Ok(self.screen_rect.get())
    }

    fn window_client_rect(&self, window: WindowHandle) -> PlatformResult<Rect> {
        self.record(Call::WindowClientRect(window));
        self.check("GetClientRect")?;
        Ok(self.client_rect.get())
    }

    fn cursor_position(&self) -> PlatformResult<Point> {
        self.record(Call::CursorPosition);
        self.check("GetCursorPos")?;
        Ok(self.cursor.get())
    }

    fn set_cursor_position(&self, position: Point) -> PlatformResult<()> {
        self.record(Call::SetCursorPosition(position));
        self.check("SetCursorPos")?;
        self.cursor.set(position);
        Ok(())
    }

    fn client_to_screen(&self, window: WindowHandle, point: Point) -> PlatformResult<Point> {
        self.record(Call::ClientToScreen(window, point));
        self.check("ClientToScreen")?;
        let origin = self.client_origin.get();
        Ok(Point::new(origin.x + point.x, origin.y + point.y))
    }

    fn submit_relative_move(&self, offset: Offset, no_coalesce: bool) -> PlatformResult<()> {
        self.record(Call::SubmitRelativeMove(offset, no_coalesce));
        self.check("SendInput")?;
        let cursor = self.cursor.get();
        self.cursor
            .set(Point::new(cursor.x + offset.dx, cursor.y + offset.dy));
        Ok(())
    }

    fn report_fatal(&self, message: &str) {
        self.record(Call::ReportFatal(message.to_string()));
        if self.reenter_on_report.get() {
            let nested = PlatformError::new("DestroyWindow", 1400);
            let shown = crate::agent::report::report_failure(self, &nested);
            self.nested_report_shown.set(Some(shown));
        }
        if let Some(timer) = self.tick_on_report.take() {
            crate::session::dispatch_tick(self, timer);
        }
    }
}

impl Host for FakePlatform {
    fn create_periodic_timer(&self, id: TimerId, period: Duration) -> PlatformResult<TimerId> {
        self.record(Call::CreateTimer(id, period));
        self.check("SetTimer")?;
        Ok(id)
    }

    fn cancel_timer(&self, id: TimerId) {
        self.record(Call::CancelTimer(id));
    }

    fn next_event(&self) -> HostEvent {
        self.record(Call::NextEvent);
        self.events
            .borrow_mut()
            .pop_front()
            .unwrap_or(HostEvent::Quit(0))
    }
}
