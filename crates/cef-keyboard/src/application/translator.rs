//! InputTranslator: turns host key notifications into engine key events.
//!
//! This use case owns the tracked [`ModifierState`] for one input focus
//! context and delegates delivery to a [`BrowserTarget`] trait object injected
//! at construction time.
//!
//! # Event-kind decision (for beginners)
//!
//! The engine distinguishes *raw* key events (used for keys that do something,
//! like arrows or Tab) from *char* events (used for text that ends up in an
//! input field).  A host key-down becomes:
//!
//! 1. a char event carrying the decoded character, if the key is not special
//!    and the host decoded text for it;
//! 2. otherwise a char event for Enter, because text fields ignore a raw Enter;
//! 3. otherwise a raw key-down carrying the translated code.
//!
//! Key-up events are only sent for special keys.  Printable keys were already
//! fully delivered as char events and a stray key-up would confuse the engine.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::browser::BrowserTarget;
use crate::config::TranslatorConfig;
use crate::domain::{
    event::SyntheticKeyEvent,
    modifiers::ModifierState,
    raw::RawKeyEvent,
};
use crate::keymap::{cef, host, KeyMapper};

/// Host decodes the grave accent where the engine expects an apostrophe.
const GRAVE_ACCENT: u32 = 96;
const APOSTROPHE: u32 = 39;
/// Host decodes a left curly quote where the engine expects `"`.
const LEFT_DOUBLE_QUOTE: u32 = 8220;
const QUOTATION_MARK: u32 = 34;

/// What a handler did with a host notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The event was delivered to the browser.
    Sent(SyntheticKeyEvent),
    /// The event was built but the browser reported a failure.
    Undelivered(SyntheticKeyEvent),
    /// Escape was pressed; the escape script ran instead of a key event.
    EscapeScript,
    /// Nothing was sent.
    Suppressed,
}

impl Dispatch {
    /// The synthetic event built for this notification, if any.
    pub fn event(&self) -> Option<SyntheticKeyEvent> {
        match self {
            Dispatch::Sent(event) | Dispatch::Undelivered(event) => Some(*event),
            Dispatch::EscapeScript | Dispatch::Suppressed => None,
        }
    }
}

/// Translates host key notifications for one input focus context.
pub struct InputTranslator {
    config: TranslatorConfig,
    modifiers: ModifierState,
    target: Arc<dyn BrowserTarget>,
}

impl InputTranslator {
    /// Creates a translator with all modifiers released.
    pub fn new(config: TranslatorConfig, target: Arc<dyn BrowserTarget>) -> Self {
        Self {
            config,
            modifiers: ModifierState::default(),
            target,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Snapshot of the modifier keys currently tracked as held.
    pub fn modifier_state(&self) -> ModifierState {
        self.modifiers
    }

    /// Handles decoded text delivered through the host's text-input callback.
    ///
    /// The first code point becomes the key code and no modifiers are active.
    /// Empty text is ignored.
    pub fn handle_text_input(&mut self, text: &str) -> Dispatch {
        match RawKeyEvent::from_text(text) {
            Some(raw) => self.handle_key_down(&raw),
            None => {
                debug!("ignoring empty text input");
                Dispatch::Suppressed
            }
        }
    }

    /// Gated key-down entry point for host key-down callbacks.
    ///
    /// On hosts with separate text-input delivery only the allow-listed codes
    /// get through; everything else arrives again via
    /// [`handle_text_input`](Self::handle_text_input).
    pub fn on_key_down(&mut self, raw: &RawKeyEvent) -> Dispatch {
        if !self.config.accepts_key_down(raw.code) {
            debug!(code = raw.code, "key-down suppressed; host delivers text input separately");
            return Dispatch::Suppressed;
        }
        self.handle_key_down(raw)
    }

    /// Translates a host key-down into a raw key-down or char event.
    pub fn handle_key_down(&mut self, raw: &RawKeyEvent) -> Dispatch {
        if raw.code == host::ESCAPE {
            info!("escape pressed; releasing keyboard in focused frame");
            if let Err(e) = self
                .target
                .execute_script_in_focused_frame(&self.config.escape_script)
            {
                warn!("escape script failed: {e}");
            }
            return Dispatch::EscapeScript;
        }

        let flags = raw.modifiers.to_event_flags();
        let translated = KeyMapper::translate(raw.code);

        let event = match raw.first_char() {
            Some(ch) if translated == raw.code => {
                SyntheticKeyEvent::char(normalize_char_code(u32::from(ch)), flags)
            }
            _ if translated == cef::RETURN => SyntheticKeyEvent::char(translated, flags),
            _ => SyntheticKeyEvent::raw_key_down(translated, flags),
        };

        let dispatch = self.deliver(event);
        self.modifiers.update(raw.code, true);
        dispatch
    }

    /// Sends a raw key-up for special keys and releases tracked modifiers.
    pub fn handle_key_up(&mut self, host_code: u32) -> Dispatch {
        let flags = self.modifiers.flags(self.config.alt_release);
        let translated = KeyMapper::translate(host_code);

        let dispatch = if translated != host_code {
            self.deliver(SyntheticKeyEvent::raw_key_up(translated, flags))
        } else {
            Dispatch::Suppressed
        };

        self.modifiers.update(host_code, false);
        dispatch
    }

    /// Releases every tracked modifier.  Call when focus moves away or the
    /// input context is torn down.
    pub fn reset_all_modifiers(&mut self) {
        if !self.modifiers.is_clear() {
            info!("releasing all tracked modifiers");
        }
        self.modifiers.reset();
    }

    fn deliver(&self, event: SyntheticKeyEvent) -> Dispatch {
        if self.config.log_events {
            debug!(
                kind = event.kind.label(),
                native_key_code = event.native_key_code,
                modifiers = event.modifiers.bits(),
                "sending key event"
            );
        }
        match self.target.send_key_event(event) {
            Ok(()) => Dispatch::Sent(event),
            Err(e) => {
                warn!("key event {:?} not delivered: {e}", event.kind);
                Dispatch::Undelivered(event)
            }
        }
    }
}

/// Corrects the two characters the host decodes differently from what the
/// engine expects.
fn normalize_char_code(code: u32) -> u32 {
    match code {
        GRAVE_ACCENT => APOSTROPHE,
        LEFT_DOUBLE_QUOTE => QUOTATION_MARK,
        other => other,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
