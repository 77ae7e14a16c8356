//! Outbound port to the embedded browser.

use thiserror::Error;

use crate::domain::event::SyntheticKeyEvent;

/// Error reported by a [`BrowserTarget`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("no browser is attached to this input context")]
    NoBrowser,
    #[error("the browser has no focused frame")]
    NoFocusedFrame,
    #[error("browser rejected the request: {0}")]
    Rejected(String),
}

/// The two operations the translator needs from the browser embedding.
///
/// Infrastructure implementations forward to the engine binding; test
/// implementations record calls.
#[cfg_attr(test, mockall::automock)]
pub trait BrowserTarget: Send + Sync {
    /// Delivers a synthesized key event to the active browser.
    fn send_key_event(&self, event: SyntheticKeyEvent) -> Result<(), BrowserError>;

    /// Executes `script` in the currently focused frame.
    fn execute_script_in_focused_frame(&self, script: &str) -> Result<(), BrowserError>;
}
