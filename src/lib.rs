#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-textfield/")]

//! # bubbletea-textfield
//!
//! An extended text field component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs):
//! a single-line input with the state machine of a form field layered on
//! top — behavioral kinds (plain, email, password, select), end-of-edit
//! validation, a floating placeholder with mandatory marker, a loading
//! state, and single-slot interaction hooks.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture pattern used across the
//! bubbletea ecosystem: the host owns a [`TextField`] model, forwards
//! messages to its `update()` method, and renders its `view()`. Everything
//! time-based — cursor blinking, the loading spinner, the debounced change
//! hook — runs on tag-filtered tick messages, so stale events are dropped
//! instead of double-firing.
//!
//! ## Field kinds
//!
//! | Kind | Behavior |
//! |------|----------|
//! | `Plain` | Free text, no validation |
//! | `Email` | Validated against the email pattern when editing ends |
//! | `Password` | Masked input, validated against the password rules when editing ends |
//! | `Select` | Non-editable; activation runs the select hook instead of editing |
//!
//! Validation never raises: an invalid value simply sets `is_valid()` to
//! `false`, which the view reflects through the border color.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     email: TextField,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut email = TextField::with_config(FieldConfig {
//!             kind: FieldKind::Email,
//!             ..FieldConfig::default()
//!         });
//!         email.set_width(30);
//!         let cmd = email.focus();
//!         (Self { email }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.email.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.email.view()
//!     }
//! }
//! ```
//!
//! ## Hooks
//!
//! Interaction is observed through six single-slot hooks (`on_begin`,
//! `on_change`, `on_end`, `on_return`, `on_clear`, `on_select`), each
//! receiving `&Model` for read access. Last assignment wins. The change
//! hook honors the configured debounce window: only the last value of a
//! burst is delivered.
//!
//! ## Validation helpers
//!
//! The [`validate`] module exposes the email check and the five password
//! rules as standalone functions, so a host can report which rule failed:
//!
//! ```rust
//! use bubbletea_textfield::validate;
//!
//! assert!(validate::is_valid_email("a.b@example.com"));
//! assert!(!validate::has_uppercase_character("abc12345!"));
//! ```

pub mod cursor;
pub mod key;
pub mod spinner;
pub mod textfield;
pub mod validate;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focus is the boundary of the field's editing state: `focus()` may be
/// suppressed (non-editable, disabled, or select-kind fields), in which
/// case it returns `None` and the component stays blurred.
pub trait Component {
    /// Attempts to focus the component, returning an initialization
    /// command (cursor blink, reveal request) when focus was granted.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus from the component.
    fn blur(&mut self);

    /// Reports whether the component is currently focused.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyPress,
};
pub use spinner::{
    new as spinner_new, with_spinner, with_style, Model as Spinner, SpinnerOption,
    TickMsg as SpinnerTickMsg, DOT, ELLIPSIS, LINE, MINI_DOT,
};
pub use textfield::{
    blink, default_key_map as textfield_default_key_map, default_styles, new as textfield_new,
    paste, ChangeTickMsg, EchoMode, FieldConfig, FieldHook, FieldKind, KeyMap as TextFieldKeyMap,
    Localizer, Model as TextField, PasteErrMsg, PasteMsg, RevealMsg, Styles,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let mut field = textfield_new();
/// let _ = field.focus();
/// ```
pub mod prelude {
    pub use crate::cursor::Model as Cursor;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyPress,
    };
    pub use crate::spinner::{
        new as spinner_new, with_spinner, with_style, Model as Spinner, SpinnerOption,
        TickMsg as SpinnerTickMsg, DOT, ELLIPSIS, LINE, MINI_DOT,
    };
    pub use crate::textfield::{
        blink, default_key_map as textfield_default_key_map, default_styles, new as textfield_new,
        paste, ChangeTickMsg, EchoMode, FieldConfig, FieldHook, FieldKind,
        KeyMap as TextFieldKeyMap, Localizer, Model as TextField, PasteErrMsg, PasteMsg, RevealMsg,
        Styles,
    };
    pub use crate::validate::{
        has_lowercase_character, has_numeric_character, has_special_character,
        has_uppercase_character, is_valid_email, is_valid_password, is_valid_password_length,
    };
    pub use crate::Component;
}
