//! Platform call failures
//!
//! Every failure the agent can see is a platform call that did not succeed.
//! The error keeps the failing operation's name so it can be shown to the user.

use thiserror::Error;

const FACILITY_WIN32: u32 = 7;

/// A platform call that failed, with the OS error code when one was available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed (error {code})")]
pub struct PlatformError {
    pub operation: &'static str,
    pub code: u32,
    pub description: Option<String>,
}

impl PlatformError {
    pub fn new(operation: &'static str, code: u32) -> Self {
        Self {
            operation,
            code,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Build from the calling thread's last OS error.
    pub fn last_os_error(operation: &'static str) -> Self {
        let os = std::io::Error::last_os_error();
        let code = os.raw_os_error().unwrap_or_default() as u32;
        Self::new(operation, code).with_description(os.to_string())
    }

    /// Build from an HRESULT. One wrapping a Win32 error (facility 7) is
    /// unwrapped so it reports the same code as [`Self::last_os_error`].
    pub fn from_hresult(operation: &'static str, hresult: i32) -> Self {
        let value = hresult as u32;
        let code = if (value >> 16) & 0x1FFF == FACILITY_WIN32 {
            value & 0xFFFF
        } else {
            value
        };
        Self::new(operation, code)
    }

    /// Text shown to the user when this failure is reported.
    pub fn user_message(&self) -> String {
        match &self.description {
            Some(description) => format!("{}\nSystem message: {}", self, description),
            None => self.to_string(),
        }
    }
}

/// Result type for platform calls
pub type PlatformResult<T> = Result<T, PlatformError>;
