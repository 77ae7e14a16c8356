//! Synthetic key events handed to the browser engine.

use serde::{Deserialize, Serialize};

use super::flags::EventFlags;

/// Kind of synthetic key event (`cef_key_event_type_t`).
///
/// The numeric value of each variant is the engine's event type constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum KeyEventKind {
    /// Raw key press of a special key (`KEYEVENT_KEYDOWN`).
    RawKeyDown = 1,
    /// Raw key release of a special key (`KEYEVENT_KEYUP`).
    RawKeyUp = 2,
    /// Composed character input (`KEYEVENT_CHAR`).
    Char = 3,
}

impl KeyEventKind {
    /// Short label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            KeyEventKind::RawKeyDown => "raw-down",
            KeyEventKind::RawKeyUp => "raw-up",
            KeyEventKind::Char => "char",
        }
    }
}

impl From<KeyEventKind> for u32 {
    fn from(kind: KeyEventKind) -> u32 {
        kind as u32
    }
}

impl TryFrom<u32> for KeyEventKind {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(KeyEventKind::RawKeyDown),
            2 => Ok(KeyEventKind::RawKeyUp),
            3 => Ok(KeyEventKind::Char),
            other => Err(format!("unsupported key event type {other}")),
        }
    }
}

/// An event in the engine's native format.
///
/// Serializes to the dictionary shape the engine binding accepts:
/// `{"type": 3, "native_key_code": 97, "modifiers": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntheticKeyEvent {
    #[serde(rename = "type")]
    pub kind: KeyEventKind,
    pub native_key_code: u32,
    pub modifiers: EventFlags,
}

impl SyntheticKeyEvent {
    pub fn new(kind: KeyEventKind, native_key_code: u32, modifiers: EventFlags) -> Self {
        Self {
            kind,
            native_key_code,
            modifiers,
        }
    }

    pub fn raw_key_down(native_key_code: u32, modifiers: EventFlags) -> Self {
        Self::new(KeyEventKind::RawKeyDown, native_key_code, modifiers)
    }

    pub fn raw_key_up(native_key_code: u32, modifiers: EventFlags) -> Self {
        Self::new(KeyEventKind::RawKeyUp, native_key_code, modifiers)
    }

    pub fn char(native_key_code: u32, modifiers: EventFlags) -> Self {
        Self::new(KeyEventKind::Char, native_key_code, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_to_engine_dictionary_shape() {
        // Arrange
        let event = SyntheticKeyEvent::char(97, EventFlags::SHIFT_DOWN);

        // Act
        let json = serde_json::to_value(event).expect("serialize");

        // Assert
        assert_eq!(
            json,
            serde_json::json!({ "type": 3, "native_key_code": 97, "modifiers": 2 })
        );
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let result: Result<SyntheticKeyEvent, _> = serde_json::from_value(
            serde_json::json!({ "type": 0, "native_key_code": 65293, "modifiers": 0 }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_values_match_engine_constants() {
        assert_eq!(u32::from(KeyEventKind::RawKeyDown), 1);
        assert_eq!(u32::from(KeyEventKind::RawKeyUp), 2);
        assert_eq!(u32::from(KeyEventKind::Char), 3);
        assert_eq!(KeyEventKind::try_from(2), Ok(KeyEventKind::RawKeyUp));
        assert_eq!(KeyEventKind::Char.label(), "char");
    }
}
