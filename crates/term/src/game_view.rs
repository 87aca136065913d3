//! GameView: maps a `core::RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each board cell is two terminal columns wide. The field's top-left corner
//! sits at column 2, row 2; the side panel starts at column 30.

use crate::core::{get_shape, RoundSnapshot, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, PaletteColor};
use crate::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// Fixed frame size for every screen.
pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 30;

const FIELD_LEFT: u16 = 2;
const FIELD_TOP: u16 = 2;
const CELL_W: u16 = 2;
const PANEL_X: u16 = 30;
const NEXT_PREVIEW: (u16, u16) = (32, 18);
const HOLD_PREVIEW: (u16, u16) = (32, 25);

const CONTROLS: [&str; 7] = [
    "- [Arrow Keys] Move",
    "- [Up/Z] Rotate",
    "- [Down] Soft drop",
    "- [Space] Hard drop",
    "- [P] Pause",
    "- [C] Hold",
    "- [Esc] End game",
];

/// Display colour of a piece kind.
pub fn piece_color(kind: PieceKind) -> PaletteColor {
    match kind {
        PieceKind::I => PaletteColor::LightCyan,
        PieceKind::T => PaletteColor::LightMagenta,
        PieceKind::O => PaletteColor::Yellow,
        PieceKind::Z => PaletteColor::LightRed,
        PieceKind::S => PaletteColor::LightGreen,
        PieceKind::L => PaletteColor::Brown,
        PieceKind::J => PaletteColor::LightBlue,
    }
}

/// Two-column glyph and colour for a board cell.
pub fn cell_glyph(cell: Cell) -> (&'static str, PaletteColor) {
    match cell {
        Cell::Empty => (" .", PaletteColor::Black),
        Cell::Wall => ("##", PaletteColor::Grey),
        Cell::Clearing => ("==", PaletteColor::White),
        Cell::Piece(kind) => ("[]", piece_color(kind)),
    }
}

/// Screen position of board cell `(x, y)`, if it is on the board.
pub fn board_to_screen(x: i8, y: i8) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= FIELD_WIDTH as i8 || y >= FIELD_HEIGHT as i8 {
        return None;
    }
    Some((FIELD_LEFT + x as u16 * CELL_W, FIELD_TOP + y as u16))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render a full play frame into `fb`, reusing its allocation.
    pub fn render_into(&self, snap: &RoundSnapshot, fb: &mut FrameBuffer) {
        fb.resize(SCREEN_WIDTH, SCREEN_HEIGHT);
        fb.clear();

        self.draw_static_panel(fb);
        self.draw_field(fb, snap);

        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            let ghost = Tetromino { y: ghost_y, ..active };
            self.draw_piece(fb, ghost, PaletteColor::DarkGrey);
        }
        if let Some(active) = snap.active {
            self.draw_piece(fb, active, piece_color(active.kind));
        }

        self.draw_stat(fb, 13, "**Score:**", snap.score);
        self.draw_stat(fb, 14, "**Level:**", snap.level);
        self.draw_stat(fb, 15, "Lines:", snap.lines);
        if snap.paused {
            fb.put_markup(10, 10, "**   PAUSED   **");
        }

        self.draw_preview(fb, Some(snap.next), NEXT_PREVIEW);
        self.draw_preview(fb, snap.hold, HOLD_PREVIEW);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render one frame of the line-clear flash.
    ///
    /// The pending rows blink: even frames draw them black, odd frames white.
    pub fn render_clear_frame(&self, snap: &RoundSnapshot, frame: u32, fb: &mut FrameBuffer) {
        self.render_into(snap, fb);
        let color = if frame % 2 == 0 {
            PaletteColor::Black
        } else {
            PaletteColor::White
        };
        let style = CellStyle::fg(color);
        for &row in snap.pending_rows.iter() {
            for x in 1..FIELD_WIDTH as i8 - 1 {
                if let Some((sx, sy)) = board_to_screen(x, row) {
                    fb.put_str(sx, sy, "==", style);
                }
            }
        }
    }

    fn draw_static_panel(&self, fb: &mut FrameBuffer) {
        fb.put_markup(PANEL_X, 2, "# Tetris");
        fb.put_markup(PANEL_X, 4, "**Controls:**");
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_markup(PANEL_X, 5 + i as u16, line);
        }
        fb.put_markup(PANEL_X, 16, "**Next:**");
        fb.put_markup(PANEL_X, 23, "**Hold:**");
    }

    /// Label in markup, value in the label's colour.
    fn draw_stat(&self, fb: &mut FrameBuffer, row: u16, label: &str, value: u32) {
        let end = fb.put_markup(PANEL_X, row, label);
        let style = fb.get(PANEL_X, row).map(|g| g.style).unwrap_or_default();
        fb.put_u32(end + 1, row, value, style);
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot) {
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some((sx, sy)) = board_to_screen(x as i8, y as i8) {
                    let (glyph, color) = cell_glyph(cell);
                    fb.put_str(sx, sy, glyph, CellStyle::fg(color));
                }
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, piece: Tetromino, color: PaletteColor) {
        for &(dx, dy) in piece.shape().iter() {
            if let Some((sx, sy)) = board_to_screen(piece.x + dx, piece.y + dy) {
                fb.put_str(sx, sy, "[]", CellStyle::fg(color));
            }
        }
    }

    /// 4x4 preview in spawn rotation; blank cells are cleared.
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: Option<PieceKind>, at: (u16, u16)) {
        let Some(kind) = kind else {
            return;
        };
        let (left, top) = at;
        let blank = CellStyle::default();
        for py in 0..4u16 {
            for px in 0..4u16 {
                fb.put_str(left + px * CELL_W, top + py, "  ", blank);
            }
        }
        let style = CellStyle::fg(piece_color(kind));
        for &(dx, dy) in get_shape(kind, Rotation::North).iter() {
            fb.put_str(left + dx as u16 * CELL_W, top + dy as u16, "[]", style);
        }
    }
}
