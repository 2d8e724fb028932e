use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;

const INTRO: &str = "Dump everything on your mind: one item per line, or all in one go.";
const HINT: &str = "Finish with an empty line (or Ctrl-D).";

/// Collects a multi-line dump until the first blank line.
#[derive(Debug, Default)]
pub struct DumpFlow {
    lines: Vec<String>,
    quiet: bool,
    intro_shown: bool,
    chrome: UiChrome,
}

impl DumpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// No banner or prompts; stdout stays clean for machine-readable output.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Flow for DumpFlow {
    fn render(&mut self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if !self.intro_shown {
            self.chrome.print_banner();
            println!("{INTRO}");
            println!("{HINT}");
            self.intro_shown = true;
        }
        self.chrome.print_prompt("> ");
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        if input.trim().is_empty() {
            return Ok(FlowCtrl::Finish);
        }
        self.lines.push(input.to_string());
        Ok(FlowCtrl::Continue)
    }
}
