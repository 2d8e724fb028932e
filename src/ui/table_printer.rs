use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: usize = 3;
/// Columns are never shrunk below this when fitting a table to the terminal.
const MIN_COL_WIDTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
    max_width: Option<usize>,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        let mut c = self.clone();
        c.left_pad = pad;
        c
    }

    /// Return a clone that shrinks the widest columns (truncating their cells)
    /// until the table fits in `width` characters.
    pub fn with_max_width(&self, width: usize) -> Self {
        let mut c = self.clone();
        c.max_width = Some(width);
        c
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        if self.left_pad > 0 {
            write!(out, "{}", " ".repeat(self.left_pad))?;
        }
        writeln!(out, "{s}")
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.write_indented(out, &"-".repeat(width.max(1)))
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        self.write_indented(out, &title.to_uppercase())?;
        self.write_separator(out, w)
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let col_widths = self.fit_col_widths(self.compute_col_widths(headers, rows));
        Self::natural_width(&col_widths)
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
    ) {
        let mut stdout = std::io::stdout();
        let _ = self.render_table(
            table_name,
            headers,
            rows,
            empty_message,
            min_width,
            &mut stdout,
        );
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.fit_col_widths(self.compute_col_widths(headers, rows));
        let total_width = Self::natural_width(&col_widths).max(min_width.unwrap_or(0));

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                let width = total_width
                    .max(self.util.visible_width(table_name))
                    .max(self.util.visible_width(msg));
                self.render_banner(table_name, width, out)?;
                self.write_indented(out, msg)?;
                return self.write_separator(out, width);
            }
        }

        self.render_banner(table_name, total_width, out)?;
        if !headers.is_empty() {
            self.write_indented(out, &self.build_line(headers, &col_widths))?;
            self.write_separator(out, total_width)?;
        }
        for row in rows {
            self.write_indented(out, &self.build_line(row, &col_widths))?;
        }
        self.write_separator(out, total_width)
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for r in rows {
            for (i, cell) in r.iter().enumerate().take(col_widths.len()) {
                col_widths[i] = col_widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn natural_width(col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().sum::<usize>() + (col_widths.len() - 1) * COLUMN_GAP
        }
    }

    /// Narrows the widest column one step at a time until the table fits.
    fn fit_col_widths(&self, mut col_widths: Vec<usize>) -> Vec<usize> {
        let Some(limit) = self.max_width.map(|w| w.saturating_sub(self.left_pad)) else {
            return col_widths;
        };
        while Self::natural_width(&col_widths) > limit {
            let widest = col_widths
                .iter()
                .enumerate()
                .filter(|&(_, w)| *w > MIN_COL_WIDTH)
                .max_by_key(|&(i, w)| (*w, std::cmp::Reverse(i)))
                .map(|(i, _)| i);
            match widest {
                Some(i) => col_widths[i] -= 1,
                None => break,
            }
        }
        col_widths
    }

    fn build_line<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        cells
            .iter()
            .zip(col_widths)
            .map(|(cell, &w)| {
                let cell = self.util.truncate_visible(cell.as_ref(), w);
                self.util.pad_visible(&cell, w)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
