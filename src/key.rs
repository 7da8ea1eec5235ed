//! Type-safe key bindings for the text field.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with optional help text, and can be disabled without being removed from a
//! keymap. Bindings are built with the option functions ([`with_keys`],
//! [`with_keys_str`], [`with_help`], [`with_disabled`]) and checked against
//! incoming [`KeyMsg`]s with [`matches_binding`].
//!
//! ```rust
//! use bubbletea_textfield::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let submit = new_binding(vec![
//!     with_keys_str(&["enter"]),
//!     with_help("enter", "submit"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &submit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding, shown by help-style components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short form of the key, e.g. `"ctrl+l"`.
    pub key: String,
    /// What the key does, e.g. `"clear the field"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    /// Key presses that trigger the action.
    pub keys: Vec<KeyPress>,
    /// Optional help text.
    pub help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Sets the key presses of the binding.
    WithKeys(Vec<KeyPress>),
    /// Sets the help text of the binding.
    WithHelp(Help),
    /// Creates the binding disabled.
    Disabled,
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::WithKeys(keys) => binding.keys = keys,
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt::WithKeys(keys.into_iter().map(Into::into).collect())
}

/// Option: bind keys written as strings, e.g. `"left"`, `"ctrl+f"`,
/// `"alt+backspace"`. Unrecognized strings are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::WithKeys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: attach help text.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut name = s;

    while let Some((prefix, rest)) = name.split_once('+') {
        match prefix {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
        name = rest;
    }

    let code = match name {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        _ => {
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyPress { code, modifiers })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_plain_and_modified_keys() {
        assert_eq!(
            parse_key("left"),
            Some(KeyPress {
                code: KeyCode::Left,
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("ctrl+f"),
            Some(KeyPress {
                code: KeyCode::Char('f'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key("alt+backspace"),
            Some(KeyPress {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::ALT
            })
        );
        assert_eq!(parse_key("bogus+x"), None);
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let b = new_binding(vec![with_keys_str(&["right", "ctrl+f"])]);
        assert!(b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('f'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('f'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["enter"])]);
        assert!(b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        let d = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!d.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text() {
        let b = new_binding(vec![
            with_keys_str(&["ctrl+l"]),
            with_help("ctrl+l", "clear the field"),
        ]);
        assert_eq!(b.help.key, "ctrl+l");
        assert_eq!(b.help.desc, "clear the field");
    }
}
