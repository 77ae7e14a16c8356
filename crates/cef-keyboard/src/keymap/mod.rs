//! Host key code to browser-engine key code translation.
//!
//! Only "special" keys (navigation, editing, function, and modifier keys) have
//! an entry.  Any host code missing from the table is assumed to already be a
//! valid engine code and is returned unchanged.
//!
//! # How this table works
//!
//! `HOST_TO_CEF_TABLE` is a compile-time constant array of `(host, engine)`
//! pairs sorted by host code.  A lookup is a binary search over 35 entries,
//! which stays well inside the per-event budget of the UI thread and needs no
//! allocation or hashing.

pub mod cef;
pub mod host;

/// Host → engine mapping for every special key, sorted by host code.
const HOST_TO_CEF_TABLE: [(u32, u32); 35] = [
    (host::BACKSPACE, cef::BACKSPACE),
    (host::TAB, cef::TAB),
    (host::ENTER, cef::RETURN),
    (host::PAUSE, cef::PAUSE),
    (host::ESCAPE, cef::ESCAPE),
    (host::DELETE, cef::DELETE),
    (host::ARROW_UP, cef::ARROW_UP),
    (host::ARROW_DOWN, cef::ARROW_DOWN),
    (host::ARROW_RIGHT, cef::ARROW_RIGHT),
    (host::ARROW_LEFT, cef::ARROW_LEFT),
    (host::INSERT, cef::INSERT),
    (host::HOME, cef::HOME),
    (host::END, cef::END),
    (host::PAGE_UP, cef::PAGE_UP),
    (host::PAGE_DOWN, cef::PAGE_DOWN),
    (host::F1, cef::F1),
    (host::F2, cef::F2),
    (host::F3, cef::F3),
    (host::F4, cef::F4),
    (host::F5, cef::F5),
    (host::F6, cef::F6),
    (host::F7, cef::F7),
    (host::F8, cef::F8),
    (host::F9, cef::F9),
    (host::F10, cef::F10),
    (host::F11, cef::F11),
    (host::F12, cef::F12),
    (host::SCROLL_LOCK, cef::SCROLL_LOCK),
    (host::RIGHT_SHIFT, cef::SHIFT_R),
    (host::LEFT_SHIFT, cef::SHIFT_L),
    (host::RIGHT_CTRL, cef::CONTROL_R),
    (host::LEFT_CTRL, cef::CONTROL_L),
    (host::LEFT_ALT, cef::ALT_L),
    (host::RIGHT_ALT, cef::ISO_LEVEL3_SHIFT),
    (host::PRINT_SCREEN, cef::PRINT),
];

/// Stateless access to the host → engine key table.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates a host key code to the engine's native key code.
    ///
    /// Codes without a table entry are returned unchanged.
    pub fn translate(host_code: u32) -> u32 {
        Self::lookup(host_code).unwrap_or(host_code)
    }

    /// Returns the engine code for a special key, or `None` for any code that
    /// is not in the table.
    pub fn lookup(host_code: u32) -> Option<u32> {
        HOST_TO_CEF_TABLE
            .binary_search_by_key(&host_code, |&(host, _)| host)
            .ok()
            .map(|index| HOST_TO_CEF_TABLE[index].1)
    }

    /// Returns `true` if `host_code` is a special key.
    pub fn is_special(host_code: u32) -> bool {
        Self::lookup(host_code).is_some()
    }

    /// Iterates over every `(host, engine)` pair in the table.
    pub fn entries() -> impl Iterator<Item = (u32, u32)> {
        HOST_TO_CEF_TABLE.iter().copied()
    }
}
