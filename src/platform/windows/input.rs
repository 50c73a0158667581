//! Cursor, window geometry and input injection through Win32.

use crate::platform::{Offset, PlatformError, PlatformResult, Point, Rect, WindowHandle};
use std::mem;
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_MOVE, MOUSEEVENTF_MOVE_NOCOALESCE,
    MOUSEINPUT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, GetCursorPos, GetForegroundWindow, GetWindowRect, SetCursorPos,
};

pub(crate) fn win32_error(operation: &'static str, err: windows::core::Error) -> PlatformError {
    PlatformError::from_hresult(operation, err.code().0).with_description(err.message())
}

pub(crate) fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut _)
}

fn to_rect(rect: &RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

pub fn foreground_window() -> Option<WindowHandle> {
    let window = unsafe { GetForegroundWindow() };
    if window.0.is_null() {
        None
    } else {
        Some(WindowHandle(window.0 as isize))
    }
}

pub fn window_rect(window: WindowHandle) -> PlatformResult<Rect> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(hwnd(window), &mut rect) }
        .map_err(|e| win32_error("GetWindowRect", e))?;
    Ok(to_rect(&rect))
}

pub fn client_rect(window: WindowHandle) -> PlatformResult<Rect> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd(window), &mut rect) }
        .map_err(|e| win32_error("GetClientRect", e))?;
    Ok(to_rect(&rect))
}

pub fn cursor_position() -> PlatformResult<Point> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }.map_err(|e| win32_error("GetCursorPos", e))?;
    Ok(Point::new(point.x, point.y))
}

pub fn set_cursor_position(position: Point) -> PlatformResult<()> {
    unsafe { SetCursorPos(position.x, position.y) }.map_err(|e| win32_error("SetCursorPos", e))
}

pub fn client_to_screen(window: WindowHandle, point: Point) -> PlatformResult<Point> {
    let mut converted = POINT {
        x: point.x,
        y: point.y,
    };
    if !unsafe { ClientToScreen(hwnd(window), &mut converted) }.as_bool() {
        return Err(PlatformError::last_os_error("ClientToScreen"));
    }
    Ok(Point::new(converted.x, converted.y))
}

/// Inject a single relative mouse move.
pub fn send_relative_move(offset: Offset, no_coalesce: bool) -> PlatformResult<()> {
    let flags = if no_coalesce {
        MOUSEEVENTF_MOVE | MOUSEEVENTF_MOVE_NOCOALESCE
    } else {
        MOUSEEVENTF_MOVE
    };
    let input = [INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: offset.dx,
                dy: offset.dy,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }];
    let sent = unsafe { SendInput(&input, mem::size_of::<INPUT>() as i32) };
    if sent < 1 {
        return Err(PlatformError::last_os_error("SendInput"));
    }
    Ok(())
}
