use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_CHAR;

type CharIter<'a> = std::iter::Peekable<std::str::Chars<'a>>;

const ELLIPSIS: char = '…';

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ESC_CHAR && chars.peek() == Some(&'[') {
                Self::consume_csi(&mut chars);
                continue;
            }
            out.push(c);
        }
        out
    }

    fn consume_csi(chars: &mut CharIter<'_>) {
        let _ = chars.next(); // '['
        for c in chars.by_ref() {
            if c.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Cuts `s` to at most `width` visible characters, marking the cut with `…`.
    /// Styling is dropped from cut cells.
    pub fn truncate_visible(&self, s: &str, width: usize) -> String {
        if self.visible_width(s) <= width {
            return s.to_string();
        }
        if width == 0 {
            return String::new();
        }
        let mut out: String = Self::strip_ansi(s).chars().take(width - 1).collect();
        out.push(ELLIPSIS);
        out
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
