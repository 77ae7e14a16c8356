//! Recording browser target.
//!
//! # Why a recording target?
//!
//! The real target forwards to the engine binding, which needs a running
//! browser process and a window.  `RecordingTarget` replaces both calls with
//! in-memory recording so callers can inspect exactly what was sent and in
//! what order.
//!
//! # Usage in tests
//!
//! ```
//! use std::sync::Arc;
//! use cef_keyboard::{
//!     infrastructure::recording::RecordingTarget, InputTranslator, RawKeyEvent,
//!     TranslatorConfig,
//! };
//!
//! let target = Arc::new(RecordingTarget::new());
//! let mut translator = InputTranslator::new(TranslatorConfig::default(), target.clone());
//!
//! translator.handle_key_down(&RawKeyEvent::new(97).with_text("a"));
//!
//! assert_eq!(target.events().len(), 1);
//! ```
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every call return
//! [`BrowserError::NoBrowser`] after recording it.

use std::sync::Mutex;

use crate::application::browser::{BrowserError, BrowserTarget};
use crate::domain::event::SyntheticKeyEvent;

/// A target that records every call without a browser behind it.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    /// Every event passed to `send_key_event`, in order.
    pub sent: Mutex<Vec<SyntheticKeyEvent>>,
    /// Every script passed to `execute_script_in_focused_frame`, in order.
    pub scripts: Mutex<Vec<String>>,
    /// When `true`, every call returns an error.
    pub should_fail: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target whose calls all fail with [`BrowserError::NoBrowser`].
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<SyntheticKeyEvent> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Copy of the scripts recorded so far.
    pub fn executed_scripts(&self) -> Vec<String> {
        self.scripts
            .lock()
            .map(|scripts| scripts.clone())
            .unwrap_or_default()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.clear();
        }
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.clear();
        }
    }

    fn outcome(&self) -> Result<(), BrowserError> {
        if self.should_fail {
            Err(BrowserError::NoBrowser)
        } else {
            Ok(())
        }
    }
}

impl BrowserTarget for RecordingTarget {
    fn send_key_event(&self, event: SyntheticKeyEvent) -> Result<(), BrowserError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(event);
        }
        self.outcome()
    }

    fn execute_script_in_focused_frame(&self, script: &str) -> Result<(), BrowserError> {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.push(script.to_string());
        }
        self.outcome()
    }
}
