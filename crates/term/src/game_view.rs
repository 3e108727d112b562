//! GameView: maps an engine `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::Color;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(17, 17, 17);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Controls listed under the score panel
const HELP: [&str; 6] = [
    "←/→ move",
    "↓   nudge",
    "↑   rotate",
    "spc drop",
    "r   restart",
    "q   quit",
];

/// Terminal layout for one board: frame, cells, side panel, overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
    title: &'static str,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square with common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            title: "RIALO TETRIS",
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    /// Outer size of the bordered board for a snapshot
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = dim_u16(snap.cols).saturating_mul(self.cell_w).saturating_add(2);
        let h = dim_u16(snap.rows).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', Style::plain(Rgb::new(220, 220, 220), PANEL_BG)));

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            Style::plain(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        draw_frame(fb, origin_x, origin_y, frame_w, frame_h);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (ch, style) = match snap.get(row, col).flatten() {
                    Some(color) => ('█', Style::plain(palette(color), PLAYFIELD_BG).bold()),
                    None => ('·', Style::plain(Rgb::new(60, 60, 60), PLAYFIELD_BG).dim()),
                };
                let px = origin_x + 1 + dim_u16(col) * self.cell_w;
                let py = origin_y + 1 + dim_u16(row) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_panel(fb, snap, viewport, origin_x.saturating_add(frame_w), origin_y);

        if snap.game_over {
            let mid = origin_y.saturating_add(frame_h / 2);
            draw_centered(fb, origin_x, frame_w, mid, "GAME OVER");
            draw_centered(fb, origin_x, frame_w, mid.saturating_add(1), "r: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let x = frame_right.saturating_add(2);
        // Too narrow for a readable panel: draw the board alone.
        if x.saturating_add(12) > viewport.width {
            return;
        }

        let label = Style::plain(Rgb::new(230, 230, 230), PANEL_BG).bold();
        let value = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_str(x, top, self.title, label);
        fb.put_str(x, top + 2, "SCORE", label);
        fb.put_u32(x, top + 3, snap.score, value);
        fb.put_str(x, top + 5, "LINES", label);
        fb.put_u32(x, top + 6, snap.lines, value);

        if let Some(active) = snap.active {
            fb.put_str(x, top + 8, "PIECE", label);
            fb.put_str(x, top + 9, active.kind.as_str(), Style::plain(palette(active.color), PANEL_BG));
        }

        let help = value.dim();
        for (i, line) in HELP.iter().enumerate() {
            let y = top.saturating_add(11).saturating_add(i as u16);
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, line, help);
        }
    }
}

/// Terminal color for a semantic color tag
pub fn palette(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Purple => Rgb::new(128, 0, 128),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Blue => Rgb::new(0, 0, 255),
        Color::Green => Rgb::new(0, 128, 0),
        Color::Red => Rgb::new(255, 0, 0),
    }
}

fn dim_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
}

fn draw_centered(fb: &mut FrameBuffer, left: u16, width: u16, y: u16, text: &str) {
    let text_w = dim_u16(text.chars().count());
    let x = left.saturating_add(width.saturating_sub(text_w) / 2);
    let style = Style::plain(Rgb::new(255, 60, 60), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}
