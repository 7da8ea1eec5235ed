//! Core methods for the Model struct: accessors, the field state machine
//! and the update loop.

use super::model::{paste, reveal, Model};
use super::types::{
    ChangeTickMsg, EchoMode, FieldHook, FieldKind, Localizer, PasteMsg, RevealMsg,
    EMAIL_PLACEHOLDER_KEY, PASSWORD_PLACEHOLDER_KEY, SELECT_ACCESSORY,
};
use crate::key::matches_binding;
use crate::spinner;
use crate::validate::{is_valid_email, is_valid_password};
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

// Which single-slot hook to run. Hooks receive `&Model`, so each slot is
// taken out for the call and put back afterwards.
#[derive(Clone, Copy)]
pub(super) enum HookSlot {
    Begin,
    Change,
    End,
    Return,
    Clear,
    Select,
}

impl Model {
    /// Replaces the entire value of the field.
    ///
    /// Programmatic: does not fire the change hook and does not touch
    /// validity — those belong to the editing transitions.
    pub fn set_value(&mut self, s: &str) {
        let runes: Vec<char> = s.chars().collect();
        let empty = self.value.is_empty();

        if self.char_limit > 0 && runes.len() > self.char_limit as usize {
            self.value = runes[..self.char_limit as usize].to_vec();
        } else {
            self.value = runes;
        }

        if (self.pos == 0 && empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        }

        self.handle_overflow();
    }

    /// Returns the current value of the field.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the field.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the field.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value and resets the cursor.
    ///
    /// Programmatic counterpart of the clear key; runs no hooks.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Returns the field's unique id, as carried by its
    /// [`RevealMsg`](super::RevealMsg) and
    /// [`ChangeTickMsg`](super::ChangeTickMsg).
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the field's behavioral variant.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reassigns the field's kind and re-derives its dependent defaults.
    ///
    /// Email and Password force the mandatory marker, select their echo
    /// mode and install the localized default placeholder; Select makes the
    /// field non-editable and installs a dropdown accessory. Validation at
    /// the end of editing always follows the current kind.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.kind = kind;
        match kind {
            FieldKind::Plain => {}
            FieldKind::Email => {
                self.is_mandatory = true;
                self.echo_mode = EchoMode::EchoNormal;
                self.placeholder = self.localize(EMAIL_PLACEHOLDER_KEY);
            }
            FieldKind::Password => {
                self.is_mandatory = true;
                self.echo_mode = EchoMode::EchoPassword;
                self.placeholder = self.localize(PASSWORD_PLACEHOLDER_KEY);
            }
            FieldKind::Select => {
                self.is_editable = false;
                self.set_right_view(Some(SELECT_ACCESSORY.to_string()));
            }
        }
    }

    /// Reports whether the value is currently considered valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Overrides the validity flag. The border reflects it on next render.
    pub fn set_valid(&mut self, valid: bool) {
        self.is_valid = valid;
    }

    /// Reports whether the field accepts focus.
    pub fn is_editable(&self) -> bool {
        self.is_editable
    }

    /// Sets whether the field accepts focus.
    pub fn set_editable(&mut self, editable: bool) {
        self.is_editable = editable;
    }

    /// Reports whether the field reacts to input at all.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Enables or disables the field. A disabled field renders faint and
    /// ignores every input event.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Reports whether the field shows the loading indicator.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Shows or hides the loading indicator in the trailing accessory slot.
    ///
    /// While loading, the host's accessory is suppressed and the spinner
    /// takes its place; turning loading off restores whatever accessory the
    /// host set last from the owned backup. Repeated calls with the current
    /// state are no-ops, so the indicator is never duplicated and an
    /// unpaired `set_loading(false)` leaves the accessory untouched.
    ///
    /// Returns the spinner's tick command when loading starts.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        if loading == self.is_loading {
            return None;
        }
        self.is_loading = loading;
        if loading {
            self.right_view = None;
            Some(self.spinner.tick())
        } else {
            self.right_view = self.host_right_view.clone();
            None
        }
    }

    /// Reports whether clipboard paste is allowed.
    pub fn can_paste(&self) -> bool {
        self.can_paste
    }

    /// Allows or forbids clipboard paste.
    pub fn set_can_paste(&mut self, can_paste: bool) {
        self.can_paste = can_paste;
    }

    /// Reports whether the placeholder carries the mandatory marker.
    pub fn is_mandatory(&self) -> bool {
        self.is_mandatory
    }

    /// Sets whether the placeholder carries the mandatory marker.
    pub fn set_mandatory(&mut self, mandatory: bool) {
        self.is_mandatory = mandatory;
    }

    /// Reports whether the placeholder floats above the field.
    pub fn is_floating_placeholder(&self) -> bool {
        self.is_floating_placeholder
    }

    /// Sets whether the placeholder floats above the field when the field
    /// is focused or holds text, instead of disappearing.
    pub fn set_floating_placeholder(&mut self, floating: bool) {
        self.is_floating_placeholder = floating;
    }

    /// Returns the host-facing trailing accessory.
    pub fn right_view(&self) -> Option<&str> {
        self.right_view.as_deref()
    }

    /// Sets the trailing accessory.
    ///
    /// The accessory is also recorded in an owned backup so it survives
    /// loading toggles; setting it while loading takes effect once the
    /// spinner goes away.
    pub fn set_right_view(&mut self, view: Option<String>) {
        self.host_right_view = view.clone();
        if !self.is_loading {
            self.right_view = view;
        }
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the display width in characters. Use 0 for no limit.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    /// Sets the maximum number of characters accepted. Use 0 for no limit.
    pub fn set_char_limit(&mut self, limit: i32) {
        self.char_limit = limit;
    }

    /// Sets how typed characters are echoed.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Installs the host's string-resource lookup used for the default
    /// Email/Password placeholders.
    pub fn set_localizer(&mut self, localizer: Localizer) {
        self.localizer = Some(localizer);
    }

    /// Looks `key` up through the host's localizer, falling back to the
    /// key itself.
    pub fn localize(&self, key: &str) -> String {
        self.localizer
            .as_ref()
            .and_then(|lookup| lookup(key))
            .unwrap_or_else(|| key.to_string())
    }

    /// Sets the hook run when editing begins.
    pub fn set_on_begin(&mut self, hook: FieldHook) {
        self.on_begin = Some(hook);
    }

    /// Sets the hook run when the value changes, after the optional
    /// debounce window.
    pub fn set_on_change(&mut self, hook: FieldHook) {
        self.on_change = Some(hook);
    }

    /// Sets the hook run when editing ends, after validation.
    pub fn set_on_end(&mut self, hook: FieldHook) {
        self.on_end = Some(hook);
    }

    /// Sets the hook run when the return key is pressed.
    pub fn set_on_return(&mut self, hook: FieldHook) {
        self.on_return = Some(hook);
    }

    /// Sets the hook run when the field is cleared. The text is cleared
    /// regardless of what the hook does.
    pub fn set_on_clear(&mut self, hook: FieldHook) {
        self.on_clear = Some(hook);
    }

    /// Sets the hook run when a Select field is activated.
    pub fn set_on_select(&mut self, hook: FieldHook) {
        self.on_select = Some(hook);
    }

    /// Reports whether the field currently has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Begins editing.
    ///
    /// A Select field never enters editing: activation runs the select hook
    /// instead. A non-editable or disabled field suppresses focus entirely.
    /// On success the validity flag resets to `true`, the begin hook runs,
    /// and the returned command emits [`RevealMsg`](super::RevealMsg) so a
    /// scrolling container can bring the field into view.
    pub fn focus(&mut self) -> Option<Cmd> {
        if !self.is_enabled {
            return None;
        }
        if self.kind == FieldKind::Select {
            self.run_hook(HookSlot::Select);
            return None;
        }
        if !self.is_editable || self.focus {
            return None;
        }

        self.focus = true;
        self.is_valid = true;
        self.run_hook(HookSlot::Begin);
        Some(reveal(self.id))
    }

    /// Ends editing.
    ///
    /// Email and Password fields recompute the validity flag from the
    /// current value; other kinds leave it unchanged. The end hook runs
    /// after validation. Blurring an unfocused field is a no-op.
    pub fn blur(&mut self) {
        if !self.focus {
            return;
        }
        self.focus = false;
        self.cursor.blur();

        match self.kind {
            FieldKind::Email => self.is_valid = is_valid_email(&self.value()),
            FieldKind::Password => self.is_valid = is_valid_password(&self.value()),
            FieldKind::Plain | FieldKind::Select => {}
        }

        self.run_hook(HookSlot::End);
    }

    /// Processes a message and updates the field state.
    ///
    /// Handles key input, clipboard messages, debounced change delivery,
    /// spinner ticks while loading, and the reveal/blink handshake. Should
    /// be called from the application's update loop with every message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // Debounced change delivery and spinner animation outlive focus.
        if let Some(change) = msg.downcast_ref::<ChangeTickMsg>() {
            if change.id == self.id && change.tag == self.change_tag {
                self.run_hook(HookSlot::Change);
            }
            return None;
        }

        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            if self.is_loading {
                return self.spinner.update(msg);
            }
            return None;
        }

        if let Some(revealed) = msg.downcast_ref::<RevealMsg>() {
            if revealed.id == self.id && self.focus {
                return self.cursor.focus();
            }
            return None;
        }

        if !self.focus || !self.is_enabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.submit) {
                // The return key never yields focus by itself.
                self.run_hook(HookSlot::Return);
                return None;
            }
            if matches_binding(key_msg, &self.key_map.clear_field) {
                self.run_hook(HookSlot::Clear);
                self.value.clear();
                self.set_cursor(0);
                return None;
            }
            if self.can_paste && matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }

            let before = self.value.clone();
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
            self.handle_overflow();

            if self.value != before {
                return self.schedule_change();
            }
            return None;
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            if self.can_paste {
                let chars: Vec<char> = paste_msg.0.chars().collect();
                let before_len = self.value.len();
                self.insert_runes_from_user_input(chars);
                if self.value.len() != before_len {
                    return self.schedule_change();
                }
            }
            return None;
        }

        // Remaining messages only interest the cursor (blink scheduling).
        let cursor_cmd = self.cursor.update(&msg);
        self.handle_overflow();
        cursor_cmd
    }

    // Runs one hook slot with read access to the field. The slot is taken
    // for the duration of the call so the borrow checker stays satisfied.
    pub(super) fn run_hook(&mut self, slot: HookSlot) {
        let hook = match slot {
            HookSlot::Begin => self.on_begin.take(),
            HookSlot::Change => self.on_change.take(),
            HookSlot::End => self.on_end.take(),
            HookSlot::Return => self.on_return.take(),
            HookSlot::Clear => self.on_clear.take(),
            HookSlot::Select => self.on_select.take(),
        };
        if let Some(hook) = hook {
            hook(self);
            let slot_ref = match slot {
                HookSlot::Begin => &mut self.on_begin,
                HookSlot::Change => &mut self.on_change,
                HookSlot::End => &mut self.on_end,
                HookSlot::Return => &mut self.on_return,
                HookSlot::Clear => &mut self.on_clear,
                HookSlot::Select => &mut self.on_select,
            };
            *slot_ref = Some(hook);
        }
    }

    // Bumps the change tag and either fires the hook now (no delay) or
    // schedules a tick carrying the new tag. A newer change invalidates any
    // tick still in flight, so only the last value of a burst is delivered.
    pub(super) fn schedule_change(&mut self) -> Option<Cmd> {
        self.change_tag = self.change_tag.wrapping_add(1);

        if self.change_delay.is_zero() {
            self.run_hook(HookSlot::Change);
            return None;
        }

        let id = self.id;
        let tag = self.change_tag;
        Some(bubbletea_tick(self.change_delay, move |_| {
            Box::new(ChangeTickMsg { id, tag }) as Msg
        }))
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if !self.value.is_empty() && self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if !self.value.is_empty() && self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.delete_after_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.delete_before_cursor();
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Plain characters only; shift is already encoded in the char.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes_from_user_input(vec![ch]);
            }
        }
    }

    pub(super) fn insert_runes_from_user_input(&mut self, runes: Vec<char>) {
        let mut avail_space = if self.char_limit > 0 {
            let space = self.char_limit - self.value.len() as i32;
            if space <= 0 {
                return;
            }
            Some(space as usize)
        } else {
            None
        };

        let mut head = self.value[..self.pos].to_vec();
        let tail = self.value[self.pos..].to_vec();

        for r in runes {
            head.push(r);
            self.pos += 1;

            if let Some(ref mut space) = avail_space {
                *space -= 1;
                if *space == 0 {
                    break;
                }
            }
        }

        head.extend(tail);
        self.value = head;
        self.handle_overflow();
    }

    // Keeps the cursor inside the visible window when the value is wider
    // than the display width.
    pub(super) fn handle_overflow(&mut self) {
        if self.width <= 0 {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        if self.value.len() <= self.width as usize {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            self.offset_right = (self.offset + self.width as usize).min(self.value.len());
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            self.offset = self.offset_right.saturating_sub(self.width as usize);
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
