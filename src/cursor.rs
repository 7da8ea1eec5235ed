//! Blinking caret for the text field.
//!
//! The cursor is a sub-component owned by the field model and driven by
//! forwarded messages; it can blink, stay solid, or hide entirely, and is
//! themed with Lip Gloss styles. Blink scheduling uses per-instance ids and
//! a sequence tag so a cursor never acts on a blink message that was meant
//! for another instance or that has been superseded by a reschedule.
//!
//! ```rust
//! use bubbletea_textfield::cursor;
//! use lipgloss_extras::prelude::*;
//!
//! let mut cur = cursor::new();
//! cur.style = Style::new().reverse(true);
//! let _ = cur.focus();
//! cur.set_char("x");
//! assert!(!cur.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Ids keep blink messages from leaking between cursor instances.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that kicks off blinking for any focused, blink-mode cursor.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Message that toggles the blink state of one cursor instance.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the cursor this blink targets.
    pub id: usize,
    /// Sequence tag; stale tags are dropped.
    pub tag: usize,
}

/// How the cursor behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The cursor blinks.
    Blink,
    /// The cursor is shown solid.
    Static,
    /// The cursor is hidden.
    Hide,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Blink => "blink",
                Mode::Static => "static",
                Mode::Hide => "hidden",
            }
        )
    }
}

/// Cursor state.
#[derive(Debug, Clone)]
pub struct Model {
    /// The interval between blink toggles.
    pub blink_speed: Duration,
    /// Style for the cursor block when visible.
    pub style: Style,
    /// Style for the character underneath while the block is hidden.
    pub text_style: Style,

    char: String,
    id: usize,
    focus: bool,
    // Inverted: when `blink` is true the block style is NOT showing.
    blink: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            char: " ".to_string(),
            id: next_id(),
            focus: false,
            blink: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates a cursor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides the cursor block directly.
    pub fn set_visible(&mut self, visible: bool) {
        self.blink = !visible;
    }

    /// Handles cursor messages forwarded by the owning component.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink_msg) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }

            // Only act on the blink we scheduled last.
            if blink_msg.id != self.id || blink_msg.tag != self.blink_tag {
                return None;
            }

            self.blink = !self.blink;
            return self.blink_cmd();
        }

        None
    }

    /// Returns the cursor mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the cursor mode, returning a command when blinking must restart.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.blink = self.mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink {
            return Some(blink());
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }

        self.blink_tag += 1;
        let tag = self.blink_tag;
        let id = self.id;
        let speed = self.blink_speed;

        Some(tick(speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg))
    }

    /// Focuses the cursor, starting the blink cycle when applicable.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.blink = self.mode == Mode::Hide;
        if self.mode == Mode::Blink && self.focus {
            return self.blink_cmd();
        }
        None
    }

    /// Blurs the cursor.
    pub fn blur(&mut self) {
        self.focus = false;
        self.blink = true;
    }

    /// Reports whether the cursor is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character under the cursor.
    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// Renders the cursor.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.blink {
            return self.text_style.clone().inline(true).render(&self.char);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.char)
    }
}

/// A command that starts cursor blinking.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| {
        Box::new(InitialBlinkMsg) as Msg
    })
}

/// Creates a cursor with default settings. Equivalent to [`Model::new`].
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_cmd_captures_tag_at_creation() {
        let mut m = Model::new();
        m.blink_speed = Duration::from_millis(10);
        m.mode = Mode::Blink;
        m.focus = true;

        let _cmd1 = m.blink_cmd().expect("cmd1");
        let first_tag = m.blink_tag;

        let _cmd2 = m.blink_cmd();
        let second_tag = m.blink_tag;

        // Each schedule bumps the tag, so the first command's message is
        // already stale by the time the second is pending.
        assert_ne!(first_tag, second_tag);
    }

    #[test]
    fn test_stale_blink_is_dropped() {
        let mut m = Model::new();
        m.mode = Mode::Blink;
        m.focus = true;
        let _ = m.blink_cmd();

        let shown_before = m.blink;
        let stale: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.blink_tag + 1,
        });
        assert!(m.update(&stale).is_none());
        assert_eq!(m.blink, shown_before);

        let current: Msg = Box::new(BlinkMsg {
            id: m.id,
            tag: m.blink_tag,
        });
        assert!(m.update(&current).is_some());
        assert_ne!(m.blink, shown_before);
    }

    #[test]
    fn test_blurred_cursor_ignores_blinks() {
        let mut m = Model::new();
        let msg: Msg = Box::new(BlinkMsg { id: m.id, tag: 0 });
        assert!(m.update(&msg).is_none());
    }
}
