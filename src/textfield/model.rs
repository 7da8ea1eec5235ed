//! Core model implementation for the textfield component.

use super::keymap::{default_key_map, KeyMap};
use super::types::{EchoMode, FieldConfig, FieldHook, FieldKind, Localizer, RevealMsg};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::PasteErrMsg;
use crate::cursor::{new as cursor_new, Model as Cursor};
use crate::spinner;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Ids route reveal requests and debounce ticks to the right field when a
// form holds several of them.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Colors and styles for the field's visual states.
///
/// Three colors drive the border signal: `tint` while editing, `invalid`
/// when validation failed, `border` otherwise. The rest style the text
/// runs the view produces.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Border and caption color while the field is focused.
    pub tint: Color,
    /// Border color at rest.
    pub border: Color,
    /// Border color when the value failed validation.
    pub invalid: Color,
    /// Style of the text as it's being typed.
    pub text: Style,
    /// Style of the placeholder text.
    pub placeholder: Style,
    /// Style of the floating caption at rest.
    pub label: Style,
    /// Style of the mandatory marker.
    pub mandatory: Style,
    /// Style of the trailing accessory.
    pub accessory: Style,
}

/// The default color scheme: dim gray chrome, red invalid/mandatory
/// signals, a pink tint while editing.
pub fn default_styles() -> Styles {
    Styles {
        tint: Color::from("205"),
        border: Color::from("240"),
        invalid: Color::from("196"),
        text: Style::new(),
        placeholder: Style::new().foreground(Color::from("240")),
        label: Style::new().foreground(Color::from("240")),
        mandatory: Style::new().foreground(Color::from("196")),
        accessory: Style::new().foreground(Color::from("240")),
    }
}

/// An extended text field for bubbletea-rs applications.
///
/// The field combines a single-line input (cursor movement, editing,
/// horizontal scrolling, echo modes) with the state machine of a form
/// field: a behavioral [`FieldKind`], end-of-edit validation, a floating
/// placeholder with mandatory marker, a loading state that swaps the
/// trailing accessory for a spinner, and single-slot hooks for every
/// interaction event.
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textfield::{FieldConfig, FieldKind, Model};
///
/// let mut field = Model::with_config(FieldConfig {
///     kind: FieldKind::Email,
///     ..FieldConfig::default()
/// });
/// field.set_width(30);
///
/// let _cmd = field.focus();
/// field.set_value("a.b@example.com");
/// field.blur();
/// assert!(field.is_valid());
/// ```
pub struct Model {
    /// Placeholder text, shown while the field is empty (inline or as the
    /// floating caption).
    pub placeholder: String,
    /// Visual styles.
    pub styles: Styles,
    /// The caret sub-component.
    pub cursor: Cursor,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Maximum number of characters displayed at once; 0 means unbounded.
    pub width: i32,
    /// Maximum number of characters accepted; 0 means no limit.
    pub char_limit: i32,
    /// How typed characters are echoed.
    pub echo_mode: EchoMode,
    /// Mask character used by [`EchoMode::EchoPassword`].
    pub echo_character: char,
    /// Quiet window before the change hook fires; zero fires immediately.
    pub change_delay: Duration,

    pub(super) kind: FieldKind,
    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,

    pub(super) is_valid: bool,
    pub(super) is_editable: bool,
    pub(super) is_enabled: bool,
    pub(super) is_loading: bool,
    pub(super) can_paste: bool,
    pub(super) is_mandatory: bool,
    pub(super) is_floating_placeholder: bool,

    // Displayed trailing accessory, and the owned backup of whatever the
    // host set last. The backup is what survives loading toggles.
    pub(super) right_view: Option<String>,
    pub(super) host_right_view: Option<String>,
    pub(super) spinner: spinner::Model,

    // Horizontal scroll window.
    pub(super) offset: usize,
    pub(super) offset_right: usize,

    pub(super) id: i64,
    pub(super) change_tag: u64,

    pub(super) localizer: Option<Localizer>,
    pub(super) on_begin: Option<FieldHook>,
    pub(super) on_change: Option<FieldHook>,
    pub(super) on_end: Option<FieldHook>,
    pub(super) on_return: Option<FieldHook>,
    pub(super) on_clear: Option<FieldHook>,
    pub(super) on_select: Option<FieldHook>,
}

/// Creates a field with default settings: a plain, editable, enabled,
/// valid, floating-placeholder field with no width or character limit.
pub fn new() -> Model {
    Model {
        placeholder: String::new(),
        styles: default_styles(),
        cursor: cursor_new(),
        key_map: default_key_map(),
        width: 0,
        char_limit: 0,
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        change_delay: Duration::ZERO,
        kind: FieldKind::Plain,
        value: Vec::new(),
        focus: false,
        pos: 0,
        is_valid: true,
        is_editable: true,
        is_enabled: true,
        is_loading: false,
        can_paste: true,
        is_mandatory: false,
        is_floating_placeholder: true,
        right_view: None,
        host_right_view: None,
        spinner: spinner::new(&[spinner::with_spinner(spinner::MINI_DOT.clone())]),
        offset: 0,
        offset_right: 0,
        id: next_id(),
        change_tag: 0,
        localizer: None,
        on_begin: None,
        on_change: None,
        on_end: None,
        on_return: None,
        on_clear: None,
        on_select: None,
    }
}

impl Model {
    /// Creates a field with default settings. Equivalent to [`new`].
    pub fn new() -> Self {
        new()
    }

    /// Creates a field from a [`FieldConfig`].
    ///
    /// The kind is applied last, so Email/Password re-derive the mandatory
    /// flag and default placeholder exactly as [`set_kind`](Self::set_kind)
    /// would.
    pub fn with_config(config: FieldConfig) -> Self {
        let mut m = new();
        m.change_delay = config.change_delay;
        m.is_mandatory = config.is_mandatory;
        m.is_floating_placeholder = config.is_floating_placeholder;
        m.set_kind(config.kind);
        m
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// A command that starts cursor blinking.
///
/// Returned from an application's `init()` when a field starts focused.
pub fn blink() -> Cmd {
    crate::cursor::blink()
}

pub(super) fn reveal(id: i64) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        Box::new(RevealMsg { id }) as Msg
    })
}

/// A command that reads the system clipboard and reports the result as a
/// [`PasteMsg`](super::PasteMsg) or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
