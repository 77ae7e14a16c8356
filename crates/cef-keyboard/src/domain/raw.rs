//! Raw key notifications as delivered by the host toolkit.

use super::flags::EventFlags;

/// A modifier name the host reports alongside a key-down notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HostModifier {
    Shift = 1 << 0,
    Ctrl = 1 << 1,
    Alt = 1 << 2,
    CapsLock = 1 << 3,
}

impl HostModifier {
    /// Parses a host modifier name.
    ///
    /// Returns `None` for names the engine has no flag for (e.g. `"meta"`,
    /// `"numlock"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "shift" => Some(HostModifier::Shift),
            "ctrl" => Some(HostModifier::Ctrl),
            "alt" => Some(HostModifier::Alt),
            "capslock" => Some(HostModifier::CapsLock),
            _ => None,
        }
    }

    /// The engine flag this modifier contributes.
    pub fn event_flag(self) -> EventFlags {
        match self {
            HostModifier::Shift => EventFlags::SHIFT_DOWN,
            HostModifier::Ctrl => EventFlags::CONTROL_DOWN,
            HostModifier::Alt => EventFlags::ALT_DOWN,
            HostModifier::CapsLock => EventFlags::CAPS_LOCK_ON,
        }
    }
}

/// Set of modifiers active at the moment of a key-down notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HostModifiers(u8);

impl HostModifiers {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Builds the set from host modifier names, ignoring unknown names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| HostModifier::from_name(name.as_ref()))
            .fold(Self::empty(), |set, modifier| set.with(modifier))
    }

    pub fn with(mut self, modifier: HostModifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn insert(&mut self, modifier: HostModifier) {
        self.0 |= modifier as u8;
    }

    pub fn contains(self, modifier: HostModifier) -> bool {
        self.0 & modifier as u8 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// ORs together the engine flag of every modifier in the set.
    pub fn to_event_flags(self) -> EventFlags {
        [
            HostModifier::Shift,
            HostModifier::Ctrl,
            HostModifier::Alt,
            HostModifier::CapsLock,
        ]
        .into_iter()
        .filter(|&modifier| self.contains(modifier))
        .fold(EventFlags::NONE, |flags, modifier| {
            flags | modifier.event_flag()
        })
    }
}

/// A host key-down notification.
///
/// Produced by the host and consumed immediately; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawKeyEvent {
    /// Host key code.
    pub code: u32,
    /// Text the host decoded for this key, if any.
    pub text: Option<String>,
    pub modifiers: HostModifiers,
}

impl RawKeyEvent {
    pub fn new(code: u32) -> Self {
        Self {
            code,
            text: None,
            modifiers: HostModifiers::empty(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: HostModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Builds the notification equivalent of a host text-input callback: the
    /// code is the first code point of `text` and no modifiers are active.
    ///
    /// Returns `None` for empty text.
    pub fn from_text(text: &str) -> Option<Self> {
        let first = text.chars().next()?;
        Some(Self::new(u32::from(first)).with_text(text))
    }

    /// First code point of the decoded text, if the host supplied any.
    pub fn first_char(&self) -> Option<char> {
        self.text.as_deref().and_then(|text| text.chars().next())
    }
}
