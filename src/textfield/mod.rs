//! Extended text field component for bubbletea-rs applications.
//!
//! A single-line input with the state machine of a form field layered on
//! top: behavioral kinds (plain, email, password, select), end-of-edit
//! validation, a floating placeholder with mandatory marker, a loading
//! state that swaps the trailing accessory for a spinner, and single-slot
//! hooks for every interaction event.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::textfield::{FieldConfig, FieldKind, Model};
//!
//! let mut field = Model::with_config(FieldConfig {
//!     kind: FieldKind::Email,
//!     ..FieldConfig::default()
//! });
//! field.set_width(30);
//! let _cmd = field.focus();
//! ```
//!
//! # Kinds
//!
//! `Email` and `Password` fields validate when editing ends and force the
//! mandatory marker; a `Select` field never enters editing and instead runs
//! its select hook when activated, so it can front an external picker.
//!
//! # Hooks
//!
//! Interaction is observed through six single-slot hooks — begin, change,
//! end, return, clear, select — each called with `&Model` for read access.
//! The change hook honors the configured debounce: only the last value of a
//! burst inside the quiet window is delivered.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod movement;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{blink, default_styles, new, paste, Model, Styles};
pub use types::{
    ChangeTickMsg, EchoMode, FieldConfig, FieldHook, FieldKind, Localizer, PasteErrMsg, PasteMsg,
    RevealMsg, EMAIL_PLACEHOLDER_KEY, PASSWORD_PLACEHOLDER_KEY, SELECT_ACCESSORY,
};
