//! Host toolkit key codes.
//!
//! The host toolkit reports keys with SDL 1.2-style key codes: printable keys
//! carry their ASCII value (`'a'` = 97) while navigation, function, and
//! modifier keys live in the 256–323 range.
//!
//! # Why only a handful of codes? (for beginners)
//!
//! The translator only needs to recognise the keys that the browser engine
//! cannot receive as plain characters.  Every other code is either a printable
//! character (delivered through its decoded text) or passed through unchanged,
//! so it never needs a name here.

/// Backspace (ASCII BS).
pub const BACKSPACE: u32 = 8;
/// Tab (ASCII HT).
pub const TAB: u32 = 9;
/// Return / Enter (ASCII CR).
pub const ENTER: u32 = 13;
/// Pause / Break.
pub const PAUSE: u32 = 19;
/// Escape (ASCII ESC).
pub const ESCAPE: u32 = 27;
/// Delete (ASCII DEL).
pub const DELETE: u32 = 127;

// Navigation cluster (SDLK_UP..SDLK_PAGEDOWN)
pub const ARROW_UP: u32 = 273;
pub const ARROW_DOWN: u32 = 274;
pub const ARROW_RIGHT: u32 = 275;
pub const ARROW_LEFT: u32 = 276;
pub const INSERT: u32 = 277;
pub const HOME: u32 = 278;
pub const END: u32 = 279;
pub const PAGE_UP: u32 = 280;
pub const PAGE_DOWN: u32 = 281;

// Function keys (SDLK_F1..SDLK_F12)
pub const F1: u32 = 282;
pub const F2: u32 = 283;
pub const F3: u32 = 284;
pub const F4: u32 = 285;
pub const F5: u32 = 286;
pub const F6: u32 = 287;
pub const F7: u32 = 288;
pub const F8: u32 = 289;
pub const F9: u32 = 290;
pub const F10: u32 = 291;
pub const F11: u32 = 292;
pub const F12: u32 = 293;

pub const SCROLL_LOCK: u32 = 302;

// Modifier keys
pub const RIGHT_SHIFT: u32 = 303;
pub const LEFT_SHIFT: u32 = 304;
pub const RIGHT_CTRL: u32 = 305;
pub const LEFT_CTRL: u32 = 306;
pub const LEFT_ALT: u32 = 308;
/// Reported by the host for AltGr on most European layouts.
pub const RIGHT_ALT: u32 = 313;

pub const PRINT_SCREEN: u32 = 316;

/// Host codes still forwarded by the gated key-down entry point when the host
/// delivers character input through separate text-input notifications.
pub const TEXT_INPUT_KEY_DOWN_ALLOW_LIST: [u32; 2] = [BACKSPACE, ESCAPE];
