use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, Write};

#[derive(Debug, Default, Clone)]
pub struct Prompter {
    manage_cursor: bool,
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the cursor while a flow redraws. Only useful on a terminal.
    pub fn with_cursor(mut self, manage_cursor: bool) -> Self {
        self.manage_cursor = manage_cursor;
        self
    }

    fn set_cursor_visible(&self, visible: bool) {
        if self.manage_cursor {
            print!("{}", if visible { SHOW_CURSOR } else { HIDE_CURSOR });
            let _ = io::stdout().flush();
        }
    }

    pub fn run<F: Flow>(&self, flow: &mut F) -> Result<()> {
        self.run_with_reader(flow, io::stdin().lock())
    }

    /// Loops render → read → handle until the flow finishes or input ends.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, flow: &mut F, mut reader: R) -> Result<()> {
        loop {
            self.set_cursor_visible(false);
            flow.render()?;
            self.set_cursor_visible(true);

            let mut raw = Vec::new();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                return Ok(());
            }
            let line = String::from_utf8(raw)
                .map_err(|_| Error::invalid_input("Input is not valid UTF-8 text."))?;
            let line = line.trim_end_matches(['\n', '\r']);

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
