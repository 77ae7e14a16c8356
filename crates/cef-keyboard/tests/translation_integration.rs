//! Integration tests for the keyboard translation pipeline.
//!
//! These tests drive `InputTranslator` through the public API with a
//! `RecordingTarget`, replaying the notification sequences a host toolkit
//! produces for real typing.

use std::sync::Arc;

use cef_keyboard::{
    infrastructure::recording::RecordingTarget, keymap::host, AltReleasePolicy, Dispatch,
    EventFlags, HostModifiers, InputTranslator, KeyEventKind, KeyMapper, RawKeyEvent,
    SyntheticKeyEvent, TranslatorConfig,
};

/// Routes translator logs to the test harness; set `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn translator_with(config: TranslatorConfig) -> (InputTranslator, Arc<RecordingTarget>) {
    init_tracing();
    let target = Arc::new(RecordingTarget::new());
    let translator = InputTranslator::new(config, target.clone());
    (translator, target)
}

#[test]
fn test_every_special_key_emits_key_up() {
    let (mut translator, target) = translator_with(TranslatorConfig::default());

    for (host_code, engine_code) in KeyMapper::entries() {
        target.clear();
        let dispatch = translator.handle_key_up(host_code);
        assert!(
            matches!(dispatch, Dispatch::Sent(_)),
            "host code {host_code} must emit a key-up"
        );
        assert_eq!(
            target.events(),
            vec![SyntheticKeyEvent::raw_key_up(engine_code, EventFlags::NONE)]
        );
    }
}

#[test]
fn test_printable_key_ups_are_never_emitted() {
    let (mut translator, target) = translator_with(TranslatorConfig::default());

    for code in (32..127).chain([0xE9, 0x20AC]) {
        translator.handle_key_up(code);
    }

    assert!(target.events().is_empty());
}

#[test]
fn test_typing_shifted_word_produces_char_events_and_modifier_raw_events() {
    // Arrange – Shift down, "H" down/up, Shift up, "i" down/up
    let (mut translator, target) = translator_with(TranslatorConfig::default());
    let shift = HostModifiers::from_names(["shift"]);

    // Act
    translator.handle_key_down(&RawKeyEvent::new(host::LEFT_SHIFT).with_modifiers(shift));
    translator.handle_key_down(&RawKeyEvent::new(104).with_text("H").with_modifiers(shift));
    translator.handle_key_up(104);
    translator.handle_key_up(host::LEFT_SHIFT);
    translator.handle_key_down(&RawKeyEvent::new(105).with_text("i"));
    translator.handle_key_up(105);

    // Assert
    assert_eq!(
        target.events(),
        vec![
            SyntheticKeyEvent::raw_key_down(0xFFE1, EventFlags::SHIFT_DOWN),
            SyntheticKeyEvent::char(u32::from('H'), EventFlags::SHIFT_DOWN),
            SyntheticKeyEvent::raw_key_up(0xFFE1, EventFlags::SHIFT_DOWN),
            SyntheticKeyEvent::char(u32::from('i'), EventFlags::NONE),
        ]
    );
    assert!(translator.modifier_state().is_clear());
}

#[test]
fn test_ctrl_arrow_combination_carries_control_flag_on_release() {
    let (mut translator, target) = translator_with(TranslatorConfig::default());
    let ctrl = HostModifiers::from_names(["ctrl"]);

    translator.handle_key_down(&RawKeyEvent::new(host::LEFT_CTRL).with_modifiers(ctrl));
    translator.handle_key_down(&RawKeyEvent::new(host::ARROW_RIGHT).with_modifiers(ctrl));
    translator.handle_key_up(host::ARROW_RIGHT);

    let events = target.events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[2],
        SyntheticKeyEvent::raw_key_up(0xFF53, EventFlags::CONTROL_DOWN)
    );
}

#[test]
fn test_text_input_host_session_delivers_each_character_once() {
    // A host with separate text-input delivery sends both key-down and text
    // input for a printable key; only the text input may reach the browser.
    let (mut translator, target) = translator_with(TranslatorConfig::with_separate_text_input());

    for ch in ["o", "k"] {
        let code = u32::from(ch.chars().next().unwrap_or_default());
        translator.on_key_down(&RawKeyEvent::new(code).with_text(ch));
        translator.handle_text_input(ch);
        translator.handle_key_up(code);
    }
    translator.on_key_down(&RawKeyEvent::new(host::BACKSPACE));
    translator.handle_key_up(host::BACKSPACE);

    let kinds: Vec<(KeyEventKind, u32)> = target
        .events()
        .iter()
        .map(|e| (e.kind, e.native_key_code))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (KeyEventKind::Char, u32::from('o')),
            (KeyEventKind::Char, u32::from('k')),
            (KeyEventKind::RawKeyDown, 0xFF08),
            (KeyEventKind::RawKeyUp, 0xFF08),
        ]
    );
}

#[test]
fn test_escape_uses_configured_script() {
    let config = TranslatorConfig {
        escape_script: "window.releaseKeyboard()".to_string(),
        ..TranslatorConfig::default()
    };
    let (mut translator, target) = translator_with(config);

    let dispatch = translator.handle_key_down(&RawKeyEvent::new(host::ESCAPE));

    assert_eq!(dispatch, Dispatch::EscapeScript);
    assert_eq!(
        target.executed_scripts(),
        vec!["window.releaseKeyboard()".to_string()]
    );
    assert!(target.events().is_empty());
}

#[test]
fn test_failing_target_does_not_disturb_modifier_tracking() {
    init_tracing();
    let target = Arc::new(RecordingTarget::failing());
    let mut translator = InputTranslator::new(TranslatorConfig::default(), target.clone());

    let down = translator.handle_key_down(&RawKeyEvent::new(host::RIGHT_CTRL));
    let up = translator.handle_key_up(host::RIGHT_CTRL);

    assert!(matches!(down, Dispatch::Undelivered(_)));
    assert_eq!(
        up,
        Dispatch::Undelivered(SyntheticKeyEvent::raw_key_up(0xFFE4, EventFlags::CONTROL_DOWN))
    );
    assert!(translator.modifier_state().is_clear());
}

#[test]
fn test_focus_loss_reset_prevents_stuck_modifiers() {
    // The host never reports the Alt release because focus moved away.
    let (mut translator, target) = translator_with(TranslatorConfig::default());
    translator.handle_key_down(&RawKeyEvent::new(host::LEFT_ALT));

    translator.reset_all_modifiers();
    translator.reset_all_modifiers();
    translator.handle_key_up(host::TAB);

    assert_eq!(
        target.events().last().copied(),
        Some(SyntheticKeyEvent::raw_key_up(0xFF09, EventFlags::NONE))
    );
}

#[test]
fn test_config_loaded_from_toml_drives_translator() {
    let config = TranslatorConfig::from_toml_str(
        r#"
        separate_text_input = true
        key_down_allow_list = [8, 27, 9]
        alt_release = "left_only"
        "#,
    )
    .expect("valid config");
    let (mut translator, target) = translator_with(config);

    translator.on_key_down(&RawKeyEvent::new(host::TAB));
    translator.on_key_down(&RawKeyEvent::new(host::ARROW_UP));
    translator.handle_key_down(&RawKeyEvent::new(host::RIGHT_ALT));
    translator.handle_key_up(host::TAB);

    assert_eq!(translator.config().alt_release, AltReleasePolicy::LeftOnly);
    assert_eq!(
        target.events(),
        vec![
            SyntheticKeyEvent::raw_key_down(0xFF09, EventFlags::NONE),
            SyntheticKeyEvent::raw_key_down(0xFE03, EventFlags::NONE),
            SyntheticKeyEvent::raw_key_up(0xFF09, EventFlags::NONE),
        ]
    );
}
