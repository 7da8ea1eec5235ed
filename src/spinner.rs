//! Indeterminate progress indicator for the text field's loading state.
//!
//! While a field is loading it replaces its trailing accessory with this
//! spinner (see
//! [`Model::set_loading`](crate::textfield::Model::set_loading)). The
//! spinner advances on tag-filtered [`TickMsg`]s so two pending ticks can
//! never double the animation rate, and ids keep instances from stealing
//! each other's frames.
//!
//! ```rust
//! use bubbletea_textfield::spinner::{new, with_spinner, DOT};
//!
//! let mut spinner = new(&[with_spinner(DOT.clone())]);
//! let first = spinner.view();
//! let msg = spinner.tick_msg();
//! let _next = spinner.update(Box::new(msg));
//! assert_ne!(spinner.view(), first);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and timing for a spinner.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner definition from frames and a frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

/// Basic line spinner: `|`, `/`, `-`, `\`.
pub static LINE: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: vec![
        "|".to_string(),
        "/".to_string(),
        "-".to_string(),
        "\\".to_string(),
    ],
    fps: Duration::from_millis(100),
});

/// Braille dot spinner.
pub static DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: vec![
        "⣾".to_string(),
        "⣽".to_string(),
        "⣻".to_string(),
        "⢿".to_string(),
        "⡿".to_string(),
        "⣟".to_string(),
        "⣯".to_string(),
        "⣷".to_string(),
    ],
    fps: Duration::from_millis(100),
});

/// Compact braille dot spinner.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: vec![
        "⠋".to_string(),
        "⠙".to_string(),
        "⠹".to_string(),
        "⠸".to_string(),
        "⠼".to_string(),
        "⠴".to_string(),
        "⠦".to_string(),
        "⠧".to_string(),
        "⠇".to_string(),
        "⠏".to_string(),
    ],
    fps: Duration::from_millis(83),
});

/// Text ellipsis spinner: ``, `.`, `..`, `...`.
pub static ELLIPSIS: Lazy<Spinner> = Lazy::new(|| Spinner {
    frames: vec![
        "".to_string(),
        ".".to_string(),
        "..".to_string(),
        "...".to_string(),
    ],
    fps: Duration::from_millis(333),
});

/// Message that advances a spinner by one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the spinner this tick targets; 0 addresses any spinner.
    pub id: i64,
    /// Sequence tag; stale tags are dropped.
    tag: i64,
}

/// Spinner state.
#[derive(Debug)]
pub struct Model {
    /// Frame set and timing in use.
    pub spinner: Spinner,
    /// Style applied to the rendered frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

/// Configuration option accepted by [`new`].
pub enum SpinnerOption {
    /// Sets the frame set and timing.
    WithSpinner(Spinner),
    /// Sets the render style.
    WithStyle(Box<Style>),
}

impl SpinnerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            SpinnerOption::WithSpinner(spinner) => m.spinner = spinner.clone(),
            SpinnerOption::WithStyle(style) => m.style = style.as_ref().clone(),
        }
    }
}

/// Option: use the given frame set.
pub fn with_spinner(spinner: Spinner) -> SpinnerOption {
    SpinnerOption::WithSpinner(spinner)
}

/// Option: render frames with the given style.
pub fn with_style(style: Style) -> SpinnerOption {
    SpinnerOption::WithStyle(Box::new(style))
}

/// Creates a spinner model from a list of options.
pub fn new(opts: &[SpinnerOption]) -> Model {
    let mut m = Model {
        spinner: LINE.clone(),
        style: Style::new(),
        frame: 0,
        id: next_id(),
        tag: 0,
    };
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl Model {
    /// Returns the spinner's unique id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Builds the tick message this spinner currently expects.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Returns the command that schedules the next frame advance.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let fps = self.spinner.fps;

        bubbletea_tick(fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances the animation on matching tick messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id > 0 && tick_msg.id != self.id {
                return None;
            }

            // A stale tag means a newer tick is already pending; acting on
            // both would double the animation rate.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }

            self.frame += 1;
            if self.frame >= self.spinner.frames.len() {
                self.frame = 0;
            }

            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Returns the current frame without styling, e.g. for width math.
    pub fn current_frame(&self) -> &str {
        self.spinner
            .frames
            .get(self.frame)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Renders the current frame.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_frame_and_reschedules() {
        let mut m = new(&[with_spinner(LINE.clone())]);
        assert_eq!(m.view(), "|");

        let msg = m.tick_msg();
        let cmd = m.update(Box::new(msg));
        assert!(cmd.is_some());
        assert_eq!(m.view(), "/");
    }

    #[test]
    fn test_frame_wraps_around() {
        let mut m = new(&[with_spinner(LINE.clone())]);
        for _ in 0..4 {
            let msg = m.tick_msg();
            let _ = m.update(Box::new(msg));
        }
        assert_eq!(m.view(), "|");
    }

    #[test]
    fn test_mismatched_id_is_ignored() {
        let mut m = new(&[]);
        let other: Msg = Box::new(TickMsg {
            id: m.id + 1,
            tag: 0,
        });
        assert!(m.update(other).is_none());
        assert_eq!(m.view(), "|");
    }

    #[test]
    fn test_unique_ids() {
        let a = new(&[]);
        let b = new(&[]);
        assert_ne!(a.id(), b.id());
    }
}
