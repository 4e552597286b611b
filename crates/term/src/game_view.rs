//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::{text_color, tile_color, BOARD_BG};
use crate::types::{Tile, GRID_SIZE};

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

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Horizontal gap between tiles.
    pad_x: u16,
    /// Vertical gap between tiles.
    pad_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Tiles roughly square given the usual 1:2 glyph aspect ratio.
        Self {
            tile_w: 8,
            tile_h: 3,
            pad_x: 2,
            pad_y: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, pad_x: u16, pad_y: u16) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    /// Size of the board frame, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1) * self.pad_x;
        let inner_h = n * self.tile_h + (n + 1) * self.pad_y;
        (inner_w + 2, inner_h + 2)
    }

    /// Frame placement for a viewport: centred on both axes.
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let (w, h) = self.frame_size();
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to
    /// the viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame_rect(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, frame, border);

        for (row, line) in snap.grid.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                self.draw_tile(fb, frame, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER", 0);
            self.draw_overlay(fb, frame, "press any key", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of tile `(row, col)`.
    pub fn tile_origin(&self, frame: FrameRect, row: u16, col: u16) -> (u16, u16) {
        let x = frame.x + 1 + self.pad_x + col * (self.tile_w + self.pad_x);
        let y = frame.y + 1 + self.pad_y + row * (self.tile_h + self.pad_y);
        (x, y)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: FrameRect, row: u16, col: u16, value: Tile) {
        let (x, y) = self.tile_origin(frame, row, col);
        let fill = tile_color(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(fill, fill));

        if value == 0 {
            return;
        }

        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(value, &mut digits) as u16;
        let tx = x + self.tile_w.saturating_sub(len) / 2;
        let ty = y + self.tile_h / 2;
        let style = CellStyle::new(text_color(value), fill).bold();
        fb.put_u32(tx, ty, value, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("MOVES", snap.moves),
            ("BEST", snap.max_tile),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["arrows/wasd", "hjkl move", "q quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, text: &str, line: u16) {
        let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}
