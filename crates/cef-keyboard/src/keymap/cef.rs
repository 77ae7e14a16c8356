//! Native key codes expected by the browser engine.
//!
//! On Linux the engine's `native_key_code` is an X11 KeySym, so every special
//! key maps into the `0xFF00` "function" block or the `0xFE00` ISO block of
//! X11/keysymdef.h.  Printable characters are sent as their Unicode code point
//! and need no entry here.

pub const BACKSPACE: u32 = 0xFF08; // XK_BackSpace
pub const TAB: u32 = 0xFF09; // XK_Tab
pub const RETURN: u32 = 0xFF0D; // XK_Return
pub const PAUSE: u32 = 0xFF13; // XK_Pause
pub const SCROLL_LOCK: u32 = 0xFF14; // XK_Scroll_Lock
pub const ESCAPE: u32 = 0xFF1B; // XK_Escape

pub const HOME: u32 = 0xFF50; // XK_Home
pub const ARROW_LEFT: u32 = 0xFF51; // XK_Left
pub const ARROW_UP: u32 = 0xFF52; // XK_Up
pub const ARROW_RIGHT: u32 = 0xFF53; // XK_Right
pub const ARROW_DOWN: u32 = 0xFF54; // XK_Down
pub const PAGE_UP: u32 = 0xFF55; // XK_Page_Up
pub const PAGE_DOWN: u32 = 0xFF56; // XK_Page_Down
pub const END: u32 = 0xFF57; // XK_End

pub const PRINT: u32 = 0xFF61; // XK_Print
pub const INSERT: u32 = 0xFF63; // XK_Insert

pub const F1: u32 = 0xFFBE; // XK_F1
pub const F2: u32 = 0xFFBF;
pub const F3: u32 = 0xFFC0;
pub const F4: u32 = 0xFFC1;
pub const F5: u32 = 0xFFC2;
pub const F6: u32 = 0xFFC3;
pub const F7: u32 = 0xFFC4;
pub const F8: u32 = 0xFFC5;
pub const F9: u32 = 0xFFC6;
pub const F10: u32 = 0xFFC7;
pub const F11: u32 = 0xFFC8;
pub const F12: u32 = 0xFFC9; // XK_F12

pub const SHIFT_L: u32 = 0xFFE1; // XK_Shift_L
pub const SHIFT_R: u32 = 0xFFE2; // XK_Shift_R
pub const CONTROL_L: u32 = 0xFFE3; // XK_Control_L
pub const CONTROL_R: u32 = 0xFFE4; // XK_Control_R
pub const ALT_L: u32 = 0xFFE9; // XK_Alt_L
/// Right Alt is delivered as AltGr.
pub const ISO_LEVEL3_SHIFT: u32 = 0xFE03; // XK_ISO_Level3_Shift

pub const DELETE: u32 = 0xFFFF; // XK_Delete
