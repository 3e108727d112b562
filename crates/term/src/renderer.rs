//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Frames are encoded into an in-memory byte buffer with crossterm commands
//! and written in one go. After the first frame only changed runs of glyphs
//! are re-sent; a size change or `invalidate` forces a full repaint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Draw a frame, sending only what changed since the last one.
    pub fn draw(&mut self, frame: &FrameBuffer) -> Result<()> {
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == frame.width() && prev.height() == frame.height());

        self.bytes.clear();
        match (&self.previous, same_size) {
            (Some(prev), true) => encode_diff_into(prev, frame, &mut self.bytes)?,
            _ => encode_full_into(frame, &mut self.bytes)?,
        }
        self.flush()?;

        if !same_size {
            self.previous = Some(frame.clone());
        } else if let Some(prev) = self.previous.as_mut() {
            prev.copy_from(frame);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full repaint of `frame` into `out`.
pub fn encode_full_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..frame.height() {
        if let Some(line) = frame.line(y) {
            out.queue(cursor::MoveTo(0, y))?;
            for glyph in line {
                write_glyph(out, &mut style, glyph.ch, glyph.style)?;
            }
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of glyphs that differ between `prev` and `next`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.line(y), next.line(y)) else {
            continue;
        };
        for (start, len) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(to_u16(start), y))?;
            for glyph in &new[start..start + len] {
                write_glyph(out, &mut style, glyph.ch, glyph.style)?;
            }
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs `(start, len)` where two equally long lines differ.
fn changed_runs<T: PartialEq>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut x = 0;
    while x < new.len() {
        if old.get(x) == Some(&new[x]) {
            x += 1;
            continue;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        runs.push((start, x - start));
    }
    runs
}

fn write_glyph(out: &mut Vec<u8>, current: &mut Option<Style>, ch: char, style: Style) -> Result<()> {
    if *current != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        *current = Some(style);
    }
    out.queue(Print(ch))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
