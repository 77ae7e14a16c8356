//! Value types shared by the translator.
//!
//! Nothing in this module talks to the host toolkit or the browser engine;
//! every type can be built and inspected in a plain unit test.

/// Synthetic engine events and their kinds.
pub mod event;
/// Engine modifier bitmask.
pub mod flags;
/// Tracked modifier key state.
pub mod modifiers;
/// Host key-down notifications and modifier names.
pub mod raw;
