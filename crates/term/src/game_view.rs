//! GameView: maps a [`GameState`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{piece_color, Board, GameState, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

const BLOCK: char = '█';
const EMPTY: char = '·';

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [&str; 4] = [
    "←→ move   ↑ rotate",
    "↓ soft   spc drop",
    "p pause  r reset",
    "m mute   q quit",
];

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

/// Driver-side status shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    pub muted: bool,
    pub flash: Option<&'a str>,
}

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, state: &GameState, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        if state.game_over {
            self.draw_board(fb, frame, &state.board, true);
            draw_game_over(fb, frame, state.score);
        } else {
            self.draw_board(fb, frame, &state.visible_board(), false);
            if state.paused {
                let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
                fb.put_str_centered(frame.x, frame.w, frame.y + frame.h / 2, " PAUSED ", style);
            }
        }

        self.draw_side_panel(fb, frame, state, hud, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of board cell `(x, y)` for a given viewport.
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let fx = viewport.width.saturating_sub(w) / 2;
        let fy = viewport.height.saturating_sub(h) / 2;
        (fx + 1 + x * self.cell_w, fy + 1 + y * self.cell_h)
    }

    fn draw_board(&self, fb: &mut FrameBuffer, frame: Frame, board: &Board, dim: bool) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in board.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => {
                        let style = CellStyle::new(piece_color(*kind), PLAY_BG);
                        (BLOCK, if dim { style.dim() } else { style.bold() })
                    }
                    None => (EMPTY, empty),
                };
                let px = frame.x + 1 + x as u16 * self.cell_w;
                let py = frame.y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        state: &GameState,
        hud: &Hud,
        viewport: Viewport,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let muted = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_str(panel_x, y + 1, &state.score.to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(panel_x, y + 1, &state.level.to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, state.next.as_ref());
        y += PREVIEW_SIZE as u16 + 2;

        fb.put_str(panel_x, y, "SOUND", label);
        if hud.muted {
            fb.put_str(panel_x + 6, y, "muted", muted);
        } else {
            fb.put_str(panel_x + 6, y, "on", value);
        }
        y += 1;
        if let Some(text) = hud.flash {
            fb.put_str(panel_x, y, text, CellStyle::new(Rgb::new(255, 220, 120), SCREEN_BG).bold());
        }
        y += 2;

        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, muted);
            y += 1;
        }
    }

    // Fixed 4x4 canvas so the panel layout never shifts between pieces.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: Option<&Piece>) {
        let side = PREVIEW_SIZE as u16;
        let blank = CellStyle::new(PLAY_BG, PLAY_BG);
        fb.fill_rect(x, y, side * self.cell_w, side * self.cell_h, ' ', blank);

        let Some(piece) = next else {
            return;
        };
        let style = CellStyle::new(piece_color(piece.kind), PLAY_BG).bold();
        for (dx, dy) in piece.shape.filled() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_game_over(fb: &mut FrameBuffer, frame: Frame, score: u32) {
    // The dialog overhangs the board frame by two columns on each side.
    let x = frame.x.saturating_sub(2);
    let w = frame.w + 4;
    let top = frame.y + frame.h / 2 - 3;
    let panel = CellStyle::new(Rgb::new(230, 230, 230), SCREEN_BG);
    fb.fill_rect(x, top, w, 7, ' ', panel);

    let title = CellStyle::new(Rgb::new(240, 60, 60), SCREEN_BG).bold();
    fb.put_str_centered(x, w, top + 1, "GAME OVER", title);
    fb.put_str_centered(x, w, top + 3, &format!("Final Score: {score}"), panel);
    fb.put_str_centered(x, w, top + 5, "Press R to play again", panel.bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceSequence;
    use crate::types::PieceKind;

    fn running() -> GameState {
        GameState::new(&mut PieceSequence::repeat(PieceKind::O))
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&running(), &Hud::default(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn active_piece_is_drawn_two_columns_wide() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let fb = view.render(&running(), &Hud::default(), vp);

        let (x, y) = view.cell_origin(vp, 4, 0);
        let left = fb.get(x, y).unwrap();
        let right = fb.get(x + 1, y).unwrap();
        assert_eq!(left.ch, BLOCK);
        assert_eq!(right.ch, BLOCK);
        assert_eq!(left.style.fg, piece_color(PieceKind::O));

        let (ex, ey) = view.cell_origin(vp, 0, 0);
        assert_eq!(fb.get(ex, ey).unwrap().ch, EMPTY);
    }

    #[test]
    fn panel_hidden_when_too_narrow() {
        let view = GameView::default();
        let fb = view.render(&running(), &Hud::default(), Viewport::new(24, 24));
        assert!(!fb.contains_text("SCORE"));
    }
}
