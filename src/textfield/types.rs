//! Core types for the textfield component.

use super::model::Model;
use bubbletea_rs::Msg;
use std::time::Duration;

/// Resource key for the default Email placeholder, passed to the host's
/// localizer. The key itself is the fallback text.
pub const EMAIL_PLACEHOLDER_KEY: &str = "textFields_email_placeholder";

/// Resource key for the default Password placeholder.
pub const PASSWORD_PLACEHOLDER_KEY: &str = "textFields_password_placeholder";

/// Accessory installed by [`FieldKind::Select`].
pub const SELECT_ACCESSORY: &str = "▾";

/// The behavioral variant of a field.
///
/// The kind selects validation and interaction rules: `Email` and `Password`
/// validate at the end of editing and force the mandatory marker, `Select`
/// turns the field into a trigger for an external picker instead of
/// accepting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// An ordinary free-text field. The default.
    #[default]
    Plain,
    /// Validated as an email address when editing ends.
    Email,
    /// Masked input, validated against the password rules when editing ends.
    Password,
    /// A non-editable field that routes focus attempts to the select hook.
    Select,
}

/// How typed characters are echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Display text as typed. The default.
    EchoNormal,
    /// Display the echo character instead of each typed character.
    EchoPassword,
    /// Display nothing as characters are entered.
    EchoNone,
}

/// Initial configuration for a field.
///
/// ```rust
/// use bubbletea_textfield::textfield::{FieldConfig, FieldKind, Model};
/// use std::time::Duration;
///
/// let field = Model::with_config(FieldConfig {
///     kind: FieldKind::Email,
///     change_delay: Duration::from_millis(300),
///     ..FieldConfig::default()
/// });
/// assert!(field.is_mandatory()); // forced by the Email kind
/// ```
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// The field's behavioral variant.
    pub kind: FieldKind,
    /// Whether the placeholder carries the mandatory marker.
    pub is_mandatory: bool,
    /// Whether the placeholder floats above the field instead of vanishing.
    pub is_floating_placeholder: bool,
    /// Quiet window before the change hook fires; zero fires immediately.
    pub change_delay: Duration,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            kind: FieldKind::Plain,
            is_mandatory: false,
            is_floating_placeholder: true,
            change_delay: Duration::ZERO,
        }
    }
}

/// A single-slot interaction hook. The hook receives the field for read
/// access to its current state; last assignment wins.
pub type FieldHook = Box<dyn Fn(&Model) + Send>;

/// Host-provided string-resource lookup. Returning `None` for a key makes
/// the field fall back to the key itself.
pub type Localizer = Box<dyn Fn(&str) -> Option<String> + Send>;

/// Message that delivers a debounced change notification.
///
/// Each text mutation bumps the field's change tag; a tick whose tag is no
/// longer current is dropped, so only the last change inside the quiet
/// window reaches the hook.
#[derive(Debug, Clone)]
pub struct ChangeTickMsg {
    /// Id of the field this tick targets.
    pub id: i64,
    /// Change tag captured when the tick was scheduled.
    pub tag: u64,
}

/// Message emitted when a field gains focus.
///
/// A scrolling container may observe it to bring the field into view
/// (best-effort). Routing it back into [`Model::update`](super::Model::update)
/// starts the cursor blink, so a host that forwards all messages to the
/// field needs no special handling.
#[derive(Debug, Clone)]
pub struct RevealMsg {
    /// Id of the field that gained focus.
    pub id: i64,
}

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message. The field ignores it; validity is the
/// only failure signal it surfaces.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
