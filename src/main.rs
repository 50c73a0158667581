// Prevents an additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mouse_keepalive::{AgentConfig, FAILURE_EXIT_CODE};

fn main() {
    mouse_keepalive::init_tracing();
    tracing::info!(
        "Starting {} v{}",
        mouse_keepalive::APP_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let code = match start(&AgentConfig::default()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            FAILURE_EXIT_CODE
        }
    };
    std::process::exit(code);
}

#[cfg(target_os = "windows")]
fn start(config: &AgentConfig) -> anyhow::Result<i32> {
    use mouse_keepalive::agent::report::report_failure_with;
    use mouse_keepalive::platform::windows::{show_error, Win32Host};
    use windows::Win32::Foundation::HWND;

    let host = match Win32Host::create() {
        Ok(host) => host,
        Err(err) => {
            report_failure_with(&err, |message| show_error(HWND::default(), message));
            return Ok(FAILURE_EXIT_CODE);
        }
    };
    mouse_keepalive::run(&host, config)
}

#[cfg(not(target_os = "windows"))]
fn start(_config: &AgentConfig) -> anyhow::Result<i32> {
    anyhow::bail!("{} only runs on Windows", mouse_keepalive::APP_NAME)
}
