//! Table rendering utilities for CLI outputs.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

/// Cap applied to every column so one long task list cannot blow up the
/// terminal; longer cells are truncated with an ellipsis.
const MAX_COL_WIDTH: usize = 48;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    bold_last_row: bool,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            bold_last_row: false,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the last row (the Total line) in bold.
    pub fn with_bold_last_row(mut self) -> Self {
        self.bold_last_row = true;
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell_display(cell).width();
                if i < widths.len() && w > widths[i] {
                    widths[i] = w.min(MAX_COL_WIDTH);
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');
        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push(' ');
        }
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            let bold = self.bold_last_row && r + 1 == self.rows.len();
            for (i, cell) in row.iter().enumerate() {
                let padded = pad(&cell_display(cell), widths[i]);
                if bold {
                    out.push_str(&Style::new().bold().paint(padded).to_string());
                } else {
                    out.push_str(&padded);
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Multi-line cells are flattened and over-long cells truncated.
fn cell_display(cell: &str) -> String {
    let flat = cell.replace('\n', " ");
    if flat.width() <= MAX_COL_WIDTH {
        return flat;
    }
    let mut out = String::new();
    for c in flat.chars() {
        if out.width() + 1 >= MAX_COL_WIDTH {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
