//! Engine modifier bitmask (`cef_event_flags_t`).

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Modifier bits attached to every synthetic key event.
///
/// Bit positions follow the engine's `EVENTFLAG_*` constants.  Caps lock is a
/// *lock* state rather than a held key, which is why it has its own `_ON` bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventFlags(pub u32);

impl EventFlags {
    pub const NONE: EventFlags = EventFlags(0);
    pub const CAPS_LOCK_ON: EventFlags = EventFlags(1 << 0);
    pub const SHIFT_DOWN: EventFlags = EventFlags(1 << 1);
    pub const CONTROL_DOWN: EventFlags = EventFlags(1 << 2);
    pub const ALT_DOWN: EventFlags = EventFlags(1 << 3);

    /// Returns the raw bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit in `other` is set in `self`.
    pub fn contains(self, other: EventFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EventFlags {
    type Output = EventFlags;

    fn bitor(self, rhs: EventFlags) -> EventFlags {
        EventFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EventFlags {
    fn bitor_assign(&mut self, rhs: EventFlags) {
        self.0 |= rhs.0;
    }
}
