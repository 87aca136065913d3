//! Board and geometry tests

use term_tetris::core::{get_shape, rotate_index, Board};
use term_tetris::types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_board_new_has_sentinel_border() {
    let board = Board::new();
    assert_eq!(board.width(), FIELD_WIDTH);
    assert_eq!(board.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i8 {
        for x in 0..FIELD_WIDTH as i8 {
            let expected = if Board::is_border(x, y) {
                Cell::Wall
            } else {
                Cell::Empty
            };
            assert_eq!(board.get(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(FIELD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, FIELD_HEIGHT as i8), None);
}

#[test]
fn test_rotation_zero_is_identity() {
    for py in 0..4u8 {
        for px in 0..4u8 {
            assert_eq!(rotate_index(px, py, Rotation::North), (py * 4 + px) as usize);
        }
    }
}

#[test]
fn test_every_rotation_is_a_permutation() {
    for rotation in ROTATIONS {
        let mut seen = [false; 16];
        for py in 0..4u8 {
            for px in 0..4u8 {
                let i = rotate_index(px, py, rotation);
                assert!(!seen[i], "{:?} maps two cells to {}", rotation, i);
                seen[i] = true;
            }
        }
    }
}

#[test]
fn test_rotation_formulas() {
    // E: 12 + y - 4x, S: 15 - 4y - x, W: 3 - y + 4x
    assert_eq!(rotate_index(0, 0, Rotation::East), 12);
    assert_eq!(rotate_index(3, 0, Rotation::East), 0);
    assert_eq!(rotate_index(0, 0, Rotation::South), 15);
    assert_eq!(rotate_index(3, 3, Rotation::South), 0);
    assert_eq!(rotate_index(0, 0, Rotation::West), 3);
    assert_eq!(rotate_index(0, 3, Rotation::West), 0);
}

#[test]
fn test_every_shape_has_four_minos() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert_eq!(get_shape(kind, rotation).len(), 4, "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_fits_rejects_walls_and_floor() {
    let board = Board::new();
    // Vertical I lives in mask column 2.
    assert!(board.fits(PieceKind::I, Rotation::North, -1, 0));
    assert!(!board.fits(PieceKind::I, Rotation::North, -2, 0));
    assert!(board.fits(PieceKind::I, Rotation::North, 8, 0));
    assert!(!board.fits(PieceKind::I, Rotation::North, 9, 0));
    assert!(board.fits(PieceKind::I, Rotation::North, 4, 17));
    assert!(!board.fits(PieceKind::I, Rotation::North, 4, 18));
    // Above the top edge is out of bounds too.
    assert!(!board.fits(PieceKind::I, Rotation::North, 4, -1));
}

fn scattered_board() -> Board {
    let mut board = Board::new();
    for &(x, y) in &[(1, 20), (5, 20), (10, 19), (3, 12), (7, 7), (6, 3), (2, 0), (9, 15)] {
        assert!(board.set(x, y, Cell::Piece(PieceKind::Z)));
    }
    board
}

/// Every mino in bounds and on an empty cell, worked out from the shape offsets
fn fits_by_offsets(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    get_shape(kind, rotation)
        .iter()
        .all(|&(dx, dy)| board.get(x + dx, y + dy) == Some(Cell::Empty))
}

#[test]
fn test_fits_matches_offset_check_everywhere() {
    for board in [Board::new(), scattered_board()] {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                for y in -3..22i8 {
                    for x in -3..12i8 {
                        assert_eq!(
                            board.fits(kind, rotation, x, y),
                            fits_by_offsets(&board, kind, rotation, x, y),
                            "{:?} {:?} at ({}, {})",
                            kind,
                            rotation,
                            x,
                            y
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_lock_writes_tags_and_nothing_else() {
    let mut placements = 0;
    for board in [Board::new(), scattered_board()] {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = get_shape(kind, rotation);
                for y in -3..22i8 {
                    for x in -3..12i8 {
                        let mut after = board.clone();
                        let fits = board.fits(kind, rotation, x, y);
                        assert_eq!(after.lock(kind, rotation, x, y), fits);
                        if !fits {
                            assert_eq!(after, board);
                            continue;
                        }
                        placements += 1;

                        for cy in 0..FIELD_HEIGHT as i8 {
                            for cx in 0..FIELD_WIDTH as i8 {
                                let covered =
                                    shape.iter().any(|&(dx, dy)| (x + dx, y + dy) == (cx, cy));
                                let expected = if covered {
                                    Some(Cell::Piece(kind))
                                } else {
                                    board.get(cx, cy)
                                };
                                assert_eq!(
                                    after.get(cx, cy),
                                    expected,
                                    "{:?} {:?} at ({}, {}), cell ({}, {})",
                                    kind,
                                    rotation,
                                    x,
                                    y,
                                    cx,
                                    cy
                                );
                            }
                        }
                        assert_eq!(after.filled_count(), board.filled_count() + 4);
                    }
                }
            }
        }
    }
    assert!(placements > 0);
}

#[test]
fn test_lock_tag_matches_kind() {
    let mut board = Board::new();
    assert!(board.lock(PieceKind::T, Rotation::East, 3, 10));
    for &(dx, dy) in get_shape(PieceKind::T, Rotation::East).iter() {
        let cell = board.get(3 + dx, 10 + dy);
        assert_eq!(cell.map(Cell::tag), Some(PieceKind::T.index() as u8 + 1));
    }
}

#[test]
fn test_lock_refuses_overlap() {
    let mut board = Board::new();
    assert!(board.lock(PieceKind::O, Rotation::North, 4, 18));
    let before = board.clone();
    assert!(!board.lock(PieceKind::O, Rotation::North, 4, 18));
    assert_eq!(board, before);
}

#[test]
fn test_complete_row_detection() {
    let mut board = Board::new();
    for x in 1..FIELD_WIDTH as i8 - 1 {
        assert!(!board.is_row_complete(20));
        board.set(x, 20, Cell::Piece(PieceKind::Z));
    }
    assert!(board.is_row_complete(20));
    assert!(!board.is_row_complete(19));
}
