//! Win32 host: main window, movement timer and message loop.

use super::input::{self, win32_error};
use crate::platform::{
    Host, HostEvent, Offset, Platform, PlatformError, PlatformResult, Point, Rect, TimerId,
    WindowHandle,
};
use std::time::Duration;
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, DrawTextW, EndPaint, UpdateWindow, COLOR_WINDOW, DT_CENTER, DT_NOPREFIX,
    DT_SINGLELINE, DT_VCENTER, HBRUSH, PAINTSTRUCT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect, GetMessageW, KillTimer,
    LoadCursorW, MessageBoxW, PostQuitMessage, RegisterClassExW, SetTimer, ShowWindow,
    TranslateMessage, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU, IDC_ARROW, MB_ICONERROR,
    MB_SETFOREGROUND, MSG, SW_SHOWDEFAULT, WM_DESTROY, WM_PAINT, WNDCLASSEXW,
    WS_EX_APPWINDOW, WS_OVERLAPPEDWINDOW,
};

const WINDOW_CLASS: PCWSTR = w!("MouseKeepalive");
const WINDOW_TITLE: PCWSTR = w!("Mouse Keepalive");
const WINDOW_WIDTH: i32 = 320;
const WINDOW_HEIGHT: i32 = 200;

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Show a modal error box owned by `owner` (or nobody).
pub fn show_error(owner: HWND, message: &str) {
    let text = wide(message);
    let _ = unsafe {
        MessageBoxW(
            owner,
            PCWSTR(text.as_ptr()),
            WINDOW_TITLE,
            MB_ICONERROR | MB_SETFOREGROUND,
        )
    };
}

pub struct Win32Host {
    window: HWND,
}

impl Win32Host {
    /// Register the window class, create the main window and show it.
    pub fn create() -> PlatformResult<Self> {
        let module = unsafe { GetModuleHandleW(PCWSTR::null()) }
            .map_err(|e| win32_error("GetModuleHandleW", e))?;
        let instance: HINSTANCE = module.into();

        let cursor = unsafe { LoadCursorW(HINSTANCE::default(), IDC_ARROW) }
            .map_err(|e| win32_error("LoadCursorW", e))?;

        let class = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            hInstance: instance,
            hCursor: cursor,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as isize as *mut _),
            lpszClassName: WINDOW_CLASS,
            ..Default::default()
        };
        if unsafe { RegisterClassExW(&class) } == 0 {
            return Err(PlatformError::last_os_error("RegisterClassExW"));
        }

        let window = unsafe {
            CreateWindowExW(
                WS_EX_APPWINDOW,
                WINDOW_CLASS,
                WINDOW_TITLE,
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                HWND::default(),
                HMENU::default(),
                instance,
                None,
            )
        }
        .map_err(|e| win32_error("CreateWindowExW", e))?;

        // Honors the show state the launcher asked for.
        let _ = unsafe { ShowWindow(window, SW_SHOWDEFAULT) };
        if !unsafe { UpdateWindow(window) }.as_bool() {
            return Err(PlatformError::last_os_error("UpdateWindow"));
        }

        tracing::info!("Main window created");
        Ok(Self { window })
    }
}

impl Platform for Win32Host {
    fn focused_window(&self) -> Option<WindowHandle> {
        input::foreground_window()
    }

    fn window_screen_rect(&self, window: WindowHandle) -> PlatformResult<Rect> {
        input::window_rect(window)
    }

    fn window_client_rect(&self, window: WindowHandle) -> PlatformResult<Rect> {
        input::client_rect(window)
    }

    fn cursor_position(&self) -> PlatformResult<Point> {
        input::cursor_position()
    }

    fn set_cursor_position(&self, position: Point) -> PlatformResult<()> {
        input::set_cursor_position(position)
    }

    fn client_to_screen(&self, window: WindowHandle, point: Point) -> PlatformResult<Point> {
        input::client_to_screen(window, point)
    }

    fn submit_relative_move(&self, offset: Offset, no_coalesce: bool) -> PlatformResult<()> {
        input::send_relative_move(offset, no_coalesce)
    }

    fn report_fatal(&self, message: &str) {
        show_error(self.window, message);
    }
}

impl Host for Win32Host {
    fn create_periodic_timer(&self, id: TimerId, period: Duration) -> PlatformResult<TimerId> {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        // With a callback the tick also runs inside modal loops such as an
        // open error box.
        let registered = unsafe { SetTimer(self.window, id.0, millis, Some(movement_timer_proc)) };
        if registered == 0 {
            return Err(PlatformError::last_os_error("SetTimer"));
        }
        Ok(TimerId(registered))
    }

    fn cancel_timer(&self, id: TimerId) {
        if let Err(e) = unsafe { KillTimer(self.window, id.0) } {
            tracing::warn!("KillTimer({}) failed: {}", id, e);
        }
    }

    fn next_event(&self) -> HostEvent {
        let mut msg = MSG::default();
        let status = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };
        match status.0 {
            -1 => HostEvent::Failed {
                error: PlatformError::last_os_error("GetMessageW"),
                exit_code: msg.wParam.0 as i32,
            },
            0 => HostEvent::Quit(msg.wParam.0 as i32),
            _ => {
                unsafe {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
                HostEvent::Dispatched
            }
        }
    }
}

unsafe extern "system" fn movement_timer_proc(hwnd: HWND, _message: u32, id: usize, _time: u32) {
    let host = Win32Host { window: hwnd };
    crate::session::dispatch_tick(&host, TimerId(id));
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match message {
        WM_PAINT => {
            paint_about(hwnd);
            LRESULT(0)
        }
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, message, wparam, lparam),
    }
}

unsafe fn paint_about(hwnd: HWND) {
    let mut ps = PAINTSTRUCT::default();
    let hdc = BeginPaint(hwnd, &mut ps);
    let mut rect = RECT::default();
    if GetClientRect(hwnd, &mut rect).is_ok() {
        let mut text: Vec<u16> = crate::about_text().encode_utf16().collect();
        DrawTextW(
            hdc,
            &mut text,
            &mut rect,
            DT_CENTER | DT_VCENTER | DT_SINGLELINE | DT_NOPREFIX,
        );
    }
    let _ = EndPaint(hwnd, &ps);
}
