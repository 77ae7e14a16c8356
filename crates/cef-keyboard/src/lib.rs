//! # cef-keyboard
//!
//! Translates keyboard notifications from a host UI toolkit into the synthetic
//! key events an embedded browser engine (CEF) expects, and tracks the
//! modifier keys the host does not report on release.
//!
//! The crate does not own the browser, create windows, or manage focus.  It
//! drives a [`BrowserTarget`] that can deliver a key event and run a script in
//! the focused frame; everything else is the embedder's job.
//!
//! # Architecture overview (for beginners)
//!
//! A host toolkit and a browser engine disagree about keyboards in two ways:
//!
//! - **Key codes.**  The host uses SDL-style codes (`273` = arrow up) while
//!   the engine expects X11 KeySyms (`0xFF52`).  Printable keys agree, since
//!   both sides use the character value.
//! - **Modifiers.**  The host lists active modifiers by name on key-down but
//!   says nothing about them on key-up.  The engine wants a modifier bitmask on
//!   every event.
//!
//! The crate is split into:
//!
//! - **`keymap`** – the static host → engine key table.
//! - **`domain`** – value types: raw notifications, synthetic events, flags,
//!   and the tracked [`ModifierState`].
//! - **`application`** – the [`InputTranslator`] use case and the
//!   [`BrowserTarget`] port it drives.
//! - **`config`** – TOML-backed [`TranslatorConfig`].
//! - **`infrastructure`** – a recording [`BrowserTarget`] for tests and tools.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod keymap;

pub use application::browser::{BrowserError, BrowserTarget};
pub use application::translator::{Dispatch, InputTranslator};
pub use config::{load_config, save_config, ConfigError, TranslatorConfig};
pub use domain::event::{KeyEventKind, SyntheticKeyEvent};
pub use domain::flags::EventFlags;
pub use domain::modifiers::{AltReleasePolicy, ModifierState};
pub use domain::raw::{HostModifier, HostModifiers, RawKeyEvent};
pub use keymap::KeyMapper;
