//! Tests for the textfield component.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn key_mod(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Box::new(KeyMsg { key: code, modifiers })
}

fn type_str(field: &mut Model, s: &str) {
    for ch in s.chars() {
        let _ = field.update(key(KeyCode::Char(ch)));
    }
}

fn counter_hook(counter: &Arc<AtomicUsize>) -> FieldHook {
    let counter = Arc::clone(counter);
    Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_new_default_values() {
    let field = new();

    assert_eq!(field.kind(), FieldKind::Plain);
    assert_eq!(field.value(), "");
    assert_eq!(field.position(), 0);
    assert_eq!(field.placeholder, "");
    assert_eq!(field.echo_mode, EchoMode::EchoNormal);
    assert_eq!(field.echo_character, '*');
    assert_eq!(field.char_limit, 0);
    assert_eq!(field.width, 0);
    assert_eq!(field.change_delay, Duration::ZERO);
    assert!(!field.focused());
    assert!(field.is_valid());
    assert!(field.is_editable());
    assert!(field.is_enabled());
    assert!(!field.is_loading());
    assert!(field.can_paste());
    assert!(!field.is_mandatory());
    assert!(field.is_floating_placeholder());
    assert!(field.right_view().is_none());
}

#[test]
fn test_with_config_email_forces_mandatory() {
    let field = Model::with_config(FieldConfig {
        kind: FieldKind::Email,
        is_mandatory: false,
        ..FieldConfig::default()
    });

    assert!(field.is_mandatory());
    assert_eq!(field.echo_mode, EchoMode::EchoNormal);
    // No localizer installed: the resource key is the fallback text.
    assert_eq!(field.placeholder, EMAIL_PLACEHOLDER_KEY);
}

#[test]
fn test_with_config_password_masks_input() {
    let field = Model::with_config(FieldConfig {
        kind: FieldKind::Password,
        ..FieldConfig::default()
    });

    assert!(field.is_mandatory());
    assert_eq!(field.echo_mode, EchoMode::EchoPassword);
    assert_eq!(field.placeholder, PASSWORD_PLACEHOLDER_KEY);
}

#[test]
fn test_localizer_resolves_placeholder() {
    let mut field = new();
    field.set_localizer(Box::new(|resource_key| {
        (resource_key == EMAIL_PLACEHOLDER_KEY).then(|| "E-mail address".to_string())
    }));

    field.set_kind(FieldKind::Email);
    assert_eq!(field.placeholder, "E-mail address");

    // Missing translations fall back to the key itself.
    field.set_kind(FieldKind::Password);
    assert_eq!(field.placeholder, PASSWORD_PLACEHOLDER_KEY);
}

#[test]
fn test_focus_resets_validity() {
    let mut field = new();
    field.set_valid(false);

    let cmd = field.focus();
    assert!(cmd.is_some());
    assert!(field.focused());
    assert!(field.is_valid());
}

#[test]
fn test_focus_suppressed_when_not_editable() {
    let mut field = new();
    field.set_editable(false);

    assert!(field.focus().is_none());
    assert!(!field.focused());
}

#[test]
fn test_focus_suppressed_when_disabled() {
    let mut field = new();
    field.set_enabled(false);

    assert!(field.focus().is_none());
    assert!(!field.focused());
}

#[test]
fn test_select_kind_routes_focus_to_hook() {
    let selected = Arc::new(AtomicUsize::new(0));
    let mut field = Model::with_config(FieldConfig {
        kind: FieldKind::Select,
        ..FieldConfig::default()
    });
    field.set_on_select(counter_hook(&selected));

    assert!(!field.is_editable());
    assert_eq!(field.right_view(), Some(SELECT_ACCESSORY));

    assert!(field.focus().is_none());
    assert!(!field.focused());
    assert_eq!(selected.load(Ordering::SeqCst), 1);
}

#[test]
fn test_blur_validates_email() {
    let mut field = Model::with_config(FieldConfig {
        kind: FieldKind::Email,
        ..FieldConfig::default()
    });

    let _ = field.focus();
    field.set_value("a@b");
    field.blur();
    assert!(!field.is_valid());

    // Editing resets the flag; ending with the same invalid text must
    // bring it right back.
    let _ = field.focus();
    assert!(field.is_valid());
    field.blur();
    assert!(!field.is_valid());

    let _ = field.focus();
    field.set_value("a.b@example.com");
    field.blur();
    assert!(field.is_valid());
}

#[test]
fn test_blur_validates_password() {
    let mut field = Model::with_config(FieldConfig {
        kind: FieldKind::Password,
        ..FieldConfig::default()
    });

    let _ = field.focus();
    field.set_value("abc12345");
    field.blur();
    assert!(!field.is_valid());

    let _ = field.focus();
    field.set_value("Abc12345!");
    field.blur();
    assert!(field.is_valid());
}

#[test]
fn test_blur_leaves_plain_validity_alone() {
    let mut field = new();
    let _ = field.focus();
    field.set_value("anything at all");
    field.blur();
    assert!(field.is_valid());
}

#[test]
fn test_blur_without_focus_is_noop() {
    let ended = Arc::new(AtomicUsize::new(0));
    let mut field = new();
    field.set_on_end(counter_hook(&ended));

    field.blur();
    assert_eq!(ended.load(Ordering::SeqCst), 0);
}

#[test]
fn test_typing_updates_value() {
    let mut field = new();
    let _ = field.focus();

    type_str(&mut field, "hello");
    assert_eq!(field.value(), "hello");
    assert_eq!(field.position(), 5);
}

#[test]
fn test_input_ignored_when_blurred() {
    let mut field = new();
    type_str(&mut field, "hello");
    assert_eq!(field.value(), "");
}

#[test]
fn test_input_ignored_when_disabled() {
    let mut field = new();
    let _ = field.focus();
    field.set_enabled(false);
    type_str(&mut field, "hello");
    assert_eq!(field.value(), "");
}

#[test]
fn test_char_limit_truncates_input() {
    let mut field = new();
    field.set_char_limit(5);
    let _ = field.focus();
    type_str(&mut field, "hello world");
    assert_eq!(field.value(), "hello");
}

#[test]
fn test_set_value_respects_char_limit() {
    let mut field = new();
    field.set_char_limit(5);
    field.set_value("hello world");
    assert_eq!(field.value(), "hello");
    assert_eq!(field.position(), 5);
}

#[test]
fn test_backspace_and_word_deletion() {
    let mut field = new();
    let _ = field.focus();
    type_str(&mut field, "hello world");

    let _ = field.update(key(KeyCode::Backspace));
    assert_eq!(field.value(), "hello worl");

    let _ = field.update(key_mod(KeyCode::Backspace, KeyModifiers::ALT));
    assert_eq!(field.value(), "hello ");
}

#[test]
fn test_return_key_runs_hook_and_keeps_focus() {
    let returned = Arc::new(AtomicUsize::new(0));
    let mut field = new();
    field.set_on_return(counter_hook(&returned));
    let _ = field.focus();

    let _ = field.update(key(KeyCode::Enter));
    assert_eq!(returned.load(Ordering::SeqCst), 1);
    // Yielding focus is the host's decision.
    assert!(field.focused());
}

#[test]
fn test_clear_key_runs_hook_then_clears_regardless() {
    let seen = Arc::new(Mutex::new(String::new()));
    let seen_in_hook = Arc::clone(&seen);
    let mut field = new();
    field.set_on_clear(Box::new(move |m| {
        *seen_in_hook.lock().unwrap() = m.value();
    }));

    let _ = field.focus();
    type_str(&mut field, "abc");
    let _ = field.update(key_mod(KeyCode::Char('l'), KeyModifiers::CONTROL));

    // The hook observed the pre-clear text, and clearing went ahead anyway.
    assert_eq!(seen.lock().unwrap().as_str(), "abc");
    assert_eq!(field.value(), "");
    assert_eq!(field.position(), 0);
}

#[test]
fn test_begin_hook_runs_on_focus() {
    let begun = Arc::new(AtomicUsize::new(0));
    let mut field = new();
    field.set_on_begin(counter_hook(&begun));

    let _ = field.focus();
    assert_eq!(begun.load(Ordering::SeqCst), 1);

    // Re-focusing while already editing does not fire again.
    let _ = field.focus();
    assert_eq!(begun.load(Ordering::SeqCst), 1);
}

#[test]
fn test_end_hook_runs_after_validation() {
    let valid_at_end = Arc::new(AtomicUsize::new(usize::MAX));
    let observed = Arc::clone(&valid_at_end);
    let mut field = Model::with_config(FieldConfig {
        kind: FieldKind::Email,
        ..FieldConfig::default()
    });
    field.set_on_end(Box::new(move |m| {
        observed.store(usize::from(m.is_valid()), Ordering::SeqCst);
    }));

    let _ = field.focus();
    field.set_value("not-an-email");
    field.blur();
    assert_eq!(valid_at_end.load(Ordering::SeqCst), 0);
}

#[test]
fn test_change_hook_fires_immediately_without_delay() {
    let changed = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(String::new()));
    let changed_in_hook = Arc::clone(&changed);
    let last_in_hook = Arc::clone(&last);

    let mut field = new();
    field.set_on_change(Box::new(move |m| {
        changed_in_hook.fetch_add(1, Ordering::SeqCst);
        *last_in_hook.lock().unwrap() = m.value();
    }));

    let _ = field.focus();
    type_str(&mut field, "abc");

    assert_eq!(changed.load(Ordering::SeqCst), 3);
    assert_eq!(last.lock().unwrap().as_str(), "abc");
}

#[test]
fn test_change_hook_not_fired_by_movement() {
    let changed = Arc::new(AtomicUsize::new(0));
    let mut field = new();
    field.set_on_change(counter_hook(&changed));

    let _ = field.focus();
    type_str(&mut field, "ab");
    let fired = changed.load(Ordering::SeqCst);

    let _ = field.update(key(KeyCode::Left));
    let _ = field.update(key(KeyCode::Home));
    assert_eq!(changed.load(Ordering::SeqCst), fired);
}

#[test]
fn test_change_debounce_delivers_last_value_once() {
    let changed = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(String::new()));
    let changed_in_hook = Arc::clone(&changed);
    let last_in_hook = Arc::clone(&last);

    let mut field = Model::with_config(FieldConfig {
        change_delay: Duration::from_millis(300),
        ..FieldConfig::default()
    });
    field.set_on_change(Box::new(move |m| {
        changed_in_hook.fetch_add(1, Ordering::SeqCst);
        *last_in_hook.lock().unwrap() = m.value();
    }));

    let _ = field.focus();

    // Three keystrokes inside the quiet window: each schedules a tick and
    // supersedes the previous one.
    let cmd = field.update(key(KeyCode::Char('a')));
    assert!(cmd.is_some());
    let first_tag = field.change_tag;
    let _ = field.update(key(KeyCode::Char('b')));
    let _ = field.update(key(KeyCode::Char('c')));
    assert_eq!(changed.load(Ordering::SeqCst), 0);

    // Superseded ticks are dropped.
    let stale: Msg = Box::new(ChangeTickMsg {
        id: field.id(),
        tag: first_tag,
    });
    let _ = field.update(stale);
    assert_eq!(changed.load(Ordering::SeqCst), 0);

    // The live tick delivers exactly once, with the final text.
    let live: Msg = Box::new(ChangeTickMsg {
        id: field.id(),
        tag: field.change_tag,
    });
    let _ = field.update(live);
    assert_eq!(changed.load(Ordering::SeqCst), 1);
    assert_eq!(last.lock().unwrap().as_str(), "abc");
}

#[test]
fn test_change_tick_for_other_field_is_ignored() {
    let changed = Arc::new(AtomicUsize::new(0));
    let mut field = Model::with_config(FieldConfig {
        change_delay: Duration::from_millis(100),
        ..FieldConfig::default()
    });
    field.set_on_change(counter_hook(&changed));

    let _ = field.focus();
    let _ = field.update(key(KeyCode::Char('a')));

    let foreign: Msg = Box::new(ChangeTickMsg {
        id: field.id() + 1,
        tag: field.change_tag,
    });
    let _ = field.update(foreign);
    assert_eq!(changed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_set_loading_is_idempotent() {
    let mut field = new();
    field.set_right_view(Some("€".to_string()));

    assert!(field.set_loading(true).is_some());
    assert!(field.is_loading());
    // The host accessory is suppressed while the spinner is shown.
    assert!(field.right_view().is_none());
    // A second start changes nothing and schedules no second spinner.
    assert!(field.set_loading(true).is_none());
    assert!(field.right_view().is_none());

    assert!(field.set_loading(false).is_none());
    assert!(!field.is_loading());
    assert_eq!(field.right_view(), Some("€"));

    // Stopping without a prior start is a no-op.
    assert!(field.set_loading(false).is_none());
    assert_eq!(field.right_view(), Some("€"));
}

#[test]
fn test_accessory_set_during_loading_survives() {
    let mut field = new();
    field.set_right_view(Some("a".to_string()));

    let _ = field.set_loading(true);
    field.set_right_view(Some("b".to_string()));
    let _ = field.set_loading(false);

    assert_eq!(field.right_view(), Some("b"));
}

#[test]
fn test_spinner_ticks_only_while_loading() {
    let mut field = new();

    let _ = field.set_loading(true);
    let msg = field.spinner.tick_msg();
    assert!(field.update(Box::new(msg)).is_some());

    let _ = field.set_loading(false);
    let msg = field.spinner.tick_msg();
    assert!(field.update(Box::new(msg)).is_none());
}

#[test]
fn test_reveal_starts_cursor_blink() {
    let mut field = new();
    let _ = field.focus();

    let other: Msg = Box::new(RevealMsg { id: field.id() + 1 });
    assert!(field.update(other).is_none());

    let own: Msg = Box::new(RevealMsg { id: field.id() });
    assert!(field.update(own).is_some());
}

#[test]
fn test_paste_applies_only_when_allowed() {
    let mut field = new();
    let _ = field.focus();

    let _ = field.update(Box::new(PasteMsg("xy".to_string())));
    assert_eq!(field.value(), "xy");

    field.set_can_paste(false);
    let _ = field.update(Box::new(PasteMsg("zz".to_string())));
    assert_eq!(field.value(), "xy");

    // The paste key is inert as well.
    assert!(field
        .update(key_mod(KeyCode::Char('v'), KeyModifiers::CONTROL))
        .is_none());
}

#[test]
fn test_set_kind_select_away_keeps_editable_off() {
    let mut field = new();
    field.set_kind(FieldKind::Select);
    assert!(!field.is_editable());

    field.set_kind(FieldKind::Plain);
    assert!(!field.is_editable());
}

#[test]
fn test_reset_clears_without_hooks() {
    let cleared = Arc::new(AtomicUsize::new(0));
    let mut field = new();
    field.set_on_clear(counter_hook(&cleared));
    field.set_value("abc");

    field.reset();
    assert_eq!(field.value(), "");
    assert_eq!(cleared.load(Ordering::SeqCst), 0);
}

#[test]
fn test_view_shows_placeholder_and_marker() {
    let mut field = new();
    field.set_width(20);
    field.set_placeholder("Name");
    field.set_mandatory(true);

    let view = field.view();
    assert!(view.contains("Name"));
    assert!(view.contains("﹡"));
}

#[test]
fn test_view_floats_label_when_focused() {
    let mut field = new();
    field.set_placeholder("Name");

    // Idle and empty: the placeholder sits inline on a single content line.
    let idle_lines = field.view().lines().count();
    let _ = field.focus();
    let focused_lines = field.view().lines().count();
    assert_eq!(focused_lines, idle_lines + 1);
}

#[test]
fn test_view_non_floating_placeholder_never_floats() {
    let mut field = new();
    field.set_floating_placeholder(false);
    field.set_placeholder("Name");

    let idle_lines = field.view().lines().count();
    let _ = field.focus();
    assert_eq!(field.view().lines().count(), idle_lines);

    // Once text is present the placeholder disappears entirely.
    type_str(&mut field, "x");
    assert!(!field.view().contains("Name"));
}

#[test]
fn test_view_masks_password() {
    let mut field = Model::with_config(FieldConfig {
        kind: FieldKind::Password,
        ..FieldConfig::default()
    });
    field.set_value("secret");

    let view = field.view();
    assert!(view.contains("******"));
    assert!(!view.contains("secret"));
}

#[test]
fn test_view_spinner_replaces_accessory_while_loading() {
    let mut field = new();
    field.set_width(10);
    field.set_right_view(Some("@".to_string()));
    assert!(field.view().contains('@'));

    let _ = field.set_loading(true);
    let view = field.view();
    assert!(!view.contains('@'));
    assert!(view.contains(field.spinner.current_frame()));

    let _ = field.set_loading(false);
    assert!(field.view().contains('@'));
}

#[test]
fn test_default_key_map_bindings_enabled() {
    let map = default_key_map();
    assert!(map.submit.enabled());
    assert!(map.clear_field.enabled());
    assert!(map.paste.enabled());
    assert!(map.character_backward.enabled());
    assert!(map.delete_word_backward.enabled());
}
