//! Geometry module - tetromino masks and the rotation resolver
//!
//! Every piece is a 4x4 mask addressed row-major. Rotations are not stored:
//! [`rotate_index`] maps a cell of the *rotated* piece back to its index in the
//! unrotated mask, so a single table serves all four orientations.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece's top-left corner
pub type MinoOffset = (i8, i8);

/// The four occupied cells of a piece in one orientation
pub type PieceShape = ArrayVec<MinoOffset, 4>;

/// Side length of a piece mask
pub const MASK_SIZE: u8 = 4;

/// Shape masks in colour index order (`X` = occupied)
pub const PIECE_MASKS: [&[u8; 16]; 7] = [
    b"..X...X...X...X.", // I
    b"..X..XX...X.....", // T
    b".....XX..XX.....", // O
    b"..X..XX..X......", // Z
    b".X...XX...X.....", // S
    b".X...X...XX.....", // L
    b"..X...X..XX.....", // J
];

/// Map a cell `(px, py)` of a piece rotated by `rotation` to its index in the mask.
///
/// North is the identity, East a clockwise quarter turn, South a half turn and
/// West a counter-clockwise quarter turn.
#[inline(always)]
pub fn rotate_index(px: u8, py: u8, rotation: Rotation) -> usize {
    debug_assert!(px < MASK_SIZE && py < MASK_SIZE);
    let (x, y) = (px as usize, py as usize);
    match rotation {
        Rotation::North => y * 4 + x,
        Rotation::East => 12 + y - x * 4,
        Rotation::South => 15 - y * 4 - x,
        Rotation::West => 3 - y + x * 4,
    }
}

/// Whether cell `(px, py)` of `kind` in `rotation` is occupied
#[inline(always)]
pub fn is_occupied(kind: PieceKind, rotation: Rotation, px: u8, py: u8) -> bool {
    PIECE_MASKS[kind.index()][rotate_index(px, py, rotation)] != b'.'
}

/// Get the occupied cells (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut shape = PieceShape::new();
    for py in 0..MASK_SIZE {
        for px in 0..MASK_SIZE {
            if is_occupied(kind, rotation, px, py) {
                shape.push((px as i8, py as i8));
            }
        }
    }
    shape
}
