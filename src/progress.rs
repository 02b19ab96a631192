//! Live progress line and final summary.

use std::io::{self, Write};

use crossterm::tty::IsTty;

use crate::config::ProgressMode;

/// Cut `title` to `width` characters and append `...` when it was longer.
pub fn truncate_title(title: &str, width: usize) -> String {
    match title.char_indices().nth(width) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// Whether the progress line should be drawn for `mode` on the real stdout.
pub fn enabled_for_stdout(mode: ProgressMode) -> bool {
    match mode {
        ProgressMode::Auto => io::stdout().is_tty(),
        ProgressMode::Always => true,
        ProgressMode::Never => false,
    }
}

pub struct Progress<W: Write> {
    out: W,
    enabled: bool,
    total: usize,
    title_width: usize,
    pad: usize,
    last_len: usize,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, enabled: bool, total: usize, title_width: usize) -> Self {
        Self {
            out,
            enabled,
            total,
            title_width,
            pad: 0,
            last_len: 0,
        }
    }

    /// Redraw the progress line for the `index`-th (1-based) song.
    pub fn tick(&mut self, index: usize, title: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let title = truncate_title(title, self.title_width);
        self.pad = self.pad.max(title.chars().count());

        let line = format!("{index}/{} {title:<pad$}\r", self.total, pad = self.pad);
        self.last_len = line.chars().count();
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    /// Clear the progress line and print the totals.
    pub fn finish(mut self, exported: usize, skipped: usize) -> io::Result<()> {
        if self.enabled && self.last_len > 0 {
            write!(self.out, "{:width$}\r", "", width = self.last_len)?;
        }
        writeln!(self.out, "Done!")?;
        writeln!(self.out, "Exported: {exported}")?;
        writeln!(self.out, "Skipped: {skipped}")?;
        self.out.flush()
    }
}
