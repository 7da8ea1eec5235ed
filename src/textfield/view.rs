//! View rendering methods for the textfield component.

use super::model::Model;
use super::types::EchoMode;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

// Appended to the placeholder of a mandatory field.
const MANDATORY_MARKER: &str = "﹡";

impl Model {
    /// Renders the field: an optional floating caption above a bordered
    /// single-line input with a right-aligned trailing accessory.
    ///
    /// The border color is the field's state signal: the tint while
    /// editing, the invalid color when validation failed, the resting
    /// border color otherwise. A disabled field renders faint.
    pub fn view(&self) -> String {
        let mut out = String::new();

        if let Some(label) = self.label_view() {
            out.push_str(&label);
            out.push('\n');
        }

        let frame = Style::new()
            .border_style(lipgloss::normal_border())
            .border_foreground(self.frame_color());
        out.push_str(&frame.render(&self.content_view()));

        if !self.is_enabled {
            return Style::new().faint(true).render(&out);
        }
        out
    }

    // Focus wins over invalidity, as the active border replaces whatever
    // the resting signal was.
    fn frame_color(&self) -> Color {
        if self.focus {
            self.styles.tint.clone()
        } else if !self.is_valid {
            self.styles.invalid.clone()
        } else {
            self.styles.border.clone()
        }
    }

    // The caption shown above the field while the placeholder is floated.
    fn label_view(&self) -> Option<String> {
        if !self.label_floated() {
            return None;
        }

        let style = if self.focus {
            Style::new().foreground(self.styles.tint.clone())
        } else {
            self.styles.label.clone()
        };

        let mut label = String::from(" ");
        label.push_str(&style.render(&self.placeholder));
        if self.is_mandatory {
            label.push(' ');
            label.push_str(&self.styles.mandatory.render(MANDATORY_MARKER));
        }
        Some(label)
    }

    // A floating placeholder leaves the input line once the field is
    // focused or holds text; otherwise it sits inline.
    pub(super) fn label_floated(&self) -> bool {
        self.is_floating_placeholder
            && !self.placeholder.is_empty()
            && (self.focus || !self.value.is_empty())
    }

    fn content_view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() && !self.label_floated() {
            return self.placeholder_view();
        }
        self.value_view()
    }

    // Inline placeholder with the cursor parked on its first character.
    fn placeholder_view(&self) -> String {
        let chars: Vec<char> = self.placeholder.chars().collect();
        let mut v = String::new();

        if self.focus {
            let mut cur = self.cursor.clone();
            cur.set_char(&chars[0].to_string());
            v.push_str(&cur.view());
            let rest: String = chars[1..].iter().collect();
            v.push_str(&self.styles.placeholder.render(&rest));
        } else {
            v.push_str(&self.styles.placeholder.render(&self.placeholder));
        }

        let mut used = UnicodeWidthStr::width(self.placeholder.as_str());
        if self.is_mandatory {
            v.push(' ');
            v.push_str(&self.styles.mandatory.render(MANDATORY_MARKER));
            used += 1 + UnicodeWidthStr::width(MANDATORY_MARKER);
        }

        self.finish_line(v, used)
    }

    // The visible slice of the value with the cursor over the edit point.
    fn value_view(&self) -> String {
        let value_slice = &self.value[self.offset..self.offset_right.min(self.value.len())];
        let pos = self.pos.saturating_sub(self.offset);

        let display: Vec<char> = match self.echo_mode {
            EchoMode::EchoPassword => vec![self.echo_character; value_slice.len()],
            EchoMode::EchoNone => Vec::new(),
            EchoMode::EchoNormal => value_slice.to_vec(),
        };
        let pos = pos.min(display.len());

        let mut v = String::new();
        let before: String = display[..pos].iter().collect();
        v.push_str(&self.styles.text.render(&before));

        let mut used: usize = {
            let all: String = display.iter().collect();
            UnicodeWidthStr::width(all.as_str())
        };

        if self.focus {
            let mut cur = self.cursor.clone();
            if pos < display.len() {
                cur.set_char(&display[pos].to_string());
                v.push_str(&cur.view());
                let after: String = display[pos + 1..].iter().collect();
                v.push_str(&self.styles.text.render(&after));
            } else {
                cur.set_char(" ");
                v.push_str(&cur.view());
                used += 1;
            }
        } else {
            let after: String = display[pos..].iter().collect();
            v.push_str(&self.styles.text.render(&after));
        }

        self.finish_line(v, used)
    }

    // Pads the line to the display width and right-aligns the accessory
    // (the spinner while loading, the host accessory otherwise).
    fn finish_line(&self, mut line: String, used: usize) -> String {
        let accessory = self.accessory_view();
        let inner_width = if self.width > 0 {
            self.width as usize
        } else {
            used
        };

        match accessory {
            Some((acc, acc_width)) => {
                let pad = inner_width.saturating_sub(used + acc_width).max(1);
                line.push_str(&" ".repeat(pad));
                line.push_str(&acc);
            }
            None => {
                if self.width > 0 {
                    line.push_str(&" ".repeat(inner_width.saturating_sub(used)));
                }
            }
        }

        line
    }

    // Rendered accessory and its unstyled width.
    fn accessory_view(&self) -> Option<(String, usize)> {
        if self.is_loading {
            let frame = self.spinner.current_frame();
            return Some((
                self.spinner.view(),
                UnicodeWidthStr::width(frame),
            ));
        }
        self.right_view.as_ref().map(|accessory| {
            (
                self.styles.accessory.render(accessory),
                UnicodeWidthStr::width(accessory.as_str()),
            )
        })
    }
}
