//! Line clear module - completed row detection and board compaction
//!
//! Clearing happens in two phases so the renderer can flash the rows in between:
//! [`mark_completed_rows`] tags completed rows right after a lock, and
//! [`collapse_rows`] physically removes them once the flash is over.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::geometry::MASK_SIZE;

/// Rows waiting for the clear animation, in ascending row order.
///
/// A single lock touches at most four rows, so this never allocates.
pub type PendingRows = ArrayVec<i8, 4>;

/// Scan the four rows spanned by a piece locked with its mask top at `piece_y`
/// and mark every completed one.
///
/// Rows outside the playable area (above the board or the floor) are skipped.
pub fn mark_completed_rows(board: &mut Board, piece_y: i8) -> PendingRows {
    let mut rows = PendingRows::new();
    for py in 0..MASK_SIZE as i8 {
        let y = piece_y + py;
        if board.is_row_complete(y) {
            board.mark_row(y);
            rows.push(y);
        }
    }
    rows
}

/// Remove every pending row, top to bottom, shifting the cells above down.
///
/// Rows are processed in ascending order; removing a row only moves cells
/// above it, so rows further down keep their index.
pub fn collapse_rows(board: &mut Board, rows: &[i8]) {
    for &y in rows {
        board.remove_row(y);
    }
}
