//! Modifier keys tracked across key-down / key-up pairs.
//!
//! The host reports active modifiers on key-down only.  Key-up notifications
//! carry nothing but the key code, so the translator remembers which physical
//! modifier keys are held and rebuilds the engine flags from that.

use serde::{Deserialize, Serialize};

use super::flags::EventFlags;
use crate::keymap::host;

/// How held Alt keys contribute to the flags of a key-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltReleasePolicy {
    /// Either Alt key sets `ALT_DOWN`, like Shift and Ctrl.
    #[default]
    Symmetric,
    /// Only the left Alt key sets `ALT_DOWN`; a held right Alt (AltGr) is
    /// ignored.
    LeftOnly,
}

/// The physical modifier keys currently held down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModifierState {
    pub left_shift: bool,
    pub right_shift: bool,
    pub left_ctrl: bool,
    pub right_ctrl: bool,
    pub left_alt: bool,
    pub right_alt: bool,
}

impl ModifierState {
    /// Records a press (`is_down = true`) or release of `host_code`.
    ///
    /// Codes that are not modifier keys leave the state untouched.
    pub fn update(&mut self, host_code: u32, is_down: bool) {
        match host_code {
            host::LEFT_SHIFT => self.left_shift = is_down,
            host::RIGHT_SHIFT => self.right_shift = is_down,
            host::LEFT_CTRL => self.left_ctrl = is_down,
            host::RIGHT_CTRL => self.right_ctrl = is_down,
            host::LEFT_ALT => self.left_alt = is_down,
            host::RIGHT_ALT => self.right_alt = is_down,
            _ => {}
        }
    }

    pub fn shift(&self) -> bool {
        self.left_shift || self.right_shift
    }

    pub fn ctrl(&self) -> bool {
        self.left_ctrl || self.right_ctrl
    }

    pub fn alt(&self, policy: AltReleasePolicy) -> bool {
        match policy {
            AltReleasePolicy::Symmetric => self.left_alt || self.right_alt,
            AltReleasePolicy::LeftOnly => self.left_alt,
        }
    }

    /// Engine flags for a key-up event given the held modifier keys.
    pub fn flags(&self, policy: AltReleasePolicy) -> EventFlags {
        let mut flags = EventFlags::NONE;
        if self.shift() {
            flags |= EventFlags::SHIFT_DOWN;
        }
        if self.ctrl() {
            flags |= EventFlags::CONTROL_DOWN;
        }
        if self.alt(policy) {
            flags |= EventFlags::ALT_DOWN;
        }
        flags
    }

    /// Releases every tracked modifier.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
