//! Boxed text rendering.
//!
//! Lines are collected into a buffer so callers decide where they go.

use std::fmt::Write;

/// Widest box drawn, matching a classic 80-column terminal with margin.
pub const MAX_WIDTH: usize = 74;
const MIN_WIDTH: usize = 40;
/// Width of the flag column in option rows.
const FLAG_COL: usize = 27;

/// Builder for a box-drawn panel: `┌─ Title ──┐`, `│ text │`, `└──┘`.
pub struct BoxWriter {
    width: usize,
    buf: String,
}

impl BoxWriter {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
            buf: String::new(),
        }
    }

    /// Size to the current terminal, or [`MAX_WIDTH`] when unknown.
    pub fn for_terminal() -> Self {
        let cols = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(MAX_WIDTH);
        Self::new(cols)
    }

    fn inner(&self) -> usize {
        self.width - 4
    }

    pub fn top(&mut self, title: &str) -> &mut Self {
        let rule = self.width - 2;
        if title.is_empty() {
            let _ = writeln!(self.buf, "┌{}┐", "─".repeat(rule));
        } else {
            let head = format!("─ {title} ");
            let rest = rule.saturating_sub(head.chars().count());
            let _ = writeln!(self.buf, "┌{head}{}┐", "─".repeat(rest));
        }
        self
    }

    pub fn line(&mut self, content: &str) -> &mut Self {
        let pad = self.inner().saturating_sub(content.chars().count());
        let _ = writeln!(self.buf, "│ {content}{} │", " ".repeat(pad));
        self
    }

    pub fn center(&mut self, content: &str) -> &mut Self {
        let total = self.inner().saturating_sub(content.chars().count());
        let left = total / 2;
        let _ = writeln!(
            self.buf,
            "│ {}{content}{} │",
            " ".repeat(left),
            " ".repeat(total - left)
        );
        self
    }

    /// Flag in a fixed column, description word-wrapped beside it.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let desc_col = self.inner().saturating_sub(FLAG_COL).max(1);
        let indent = " ".repeat(FLAG_COL);
        let mut lead = format!("{flag:<FLAG_COL$}");
        if lead.chars().count() > FLAG_COL {
            // Long flags get a line to themselves.
            self.line(flag);
            lead = indent.clone();
        }

        let rows = wrap(desc, desc_col);
        if rows.is_empty() {
            return self.line(lead.trim_end());
        }
        for (i, row) in rows.iter().enumerate() {
            let col = if i == 0 { &lead } else { &indent };
            self.line(&format!("{col}{row}"));
        }
        self
    }

    pub fn bottom(&mut self) -> &mut Self {
        let _ = writeln!(self.buf, "└{}┘", "─".repeat(self.width - 2));
        self
    }

    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        if !row.is_empty() && row.len() + 1 + word.len() > width {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(word);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
