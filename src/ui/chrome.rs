use crate::ui::ansi::{FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, intro text, prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}L I F E   A D M I N{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Dump it. Sort it. Plan the week.{STYLE_RESET}");
        let blank = " ".repeat(BANNER_INNER_WIDTH);
        vec![
            format!("╭{}╮", "─".repeat(BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("│{}│", self.center_in_box(&title, BANNER_INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{}╯", "─".repeat(BANNER_INNER_WIDTH)),
        ]
    }

    /// Prints the banner centered in the terminal.
    pub fn print_banner(&self) {
        let box_width = BANNER_INNER_WIDTH + 2;
        for line in self.banner_lines() {
            println!("{}", self.format_centered_line(&line, box_width));
        }
    }

    pub fn format_centered_line(&self, s: &str, box_width: usize) -> String {
        let left = self.util.center_pad(box_width);
        let inner_pad = box_width.saturating_sub(self.util.visible_width(s)) / 2;
        format!("{}{}{}", " ".repeat(left), " ".repeat(inner_pad), s)
    }

    /// Styled one-line prompt; the cursor stays at the end of it.
    pub fn print_prompt(&self, prompt: &str) {
        print!("{PROMPT_STYLE}{prompt}{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
