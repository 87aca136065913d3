//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, leaderboard entry).
//!
//! # Field Dimensions
//!
//! The playfield is stored *with* its walls:
//!
//! - **Width**: 12 columns (0 and 11 are walls, 1-10 are playable)
//! - **Height**: 22 rows (0-20 are playable, 21 is the floor)
//! - **Spawn position**: (4, 0), rotation 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed sleep between loop iterations |
//! | `INITIAL_TICKS_PER_DROP` | 20 | Gravity at score 0 (one row per second) |
//! | `MIN_TICKS_PER_DROP` | 2 | Fastest gravity |
//! | `SCORE_PER_SPEED_STEP` | 500 | Points per gravity step |
//! | `CLEAR_FLASH_FRAMES` | 6 | Frames of the line-clear flash |
//! | `CLEAR_FLASH_FRAME_MS` | 80 | Duration of one flash frame |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{Cell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_index(piece.index()), Some(piece));
//!
//! // Rotation values wrap modulo 4
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! // Board cells carry a numeric tag
//! assert_eq!(Cell::Piece(PieceKind::I).tag(), 1);
//! assert_eq!(Cell::from_tag(9), Some(Cell::Wall));
//!
//! assert_eq!(FIELD_WIDTH, 12);
//! assert_eq!(FIELD_HEIGHT, 22);
//! ```

/// Field width in cells, including the two wall columns
pub const FIELD_WIDTH: u8 = 12;

/// Field height in cells, including the floor row
pub const FIELD_HEIGHT: u8 = 22;

/// Spawn column for new pieces (top-left of the 4x4 mask)
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2) as i8 - 2;

/// Spawn row for new pieces
pub const SPAWN_Y: i8 = 0;

/// Fixed loop interval in milliseconds
pub const TICK_MS: u32 = 50;

/// Ticks per gravity step at score 0
pub const INITIAL_TICKS_PER_DROP: u32 = 20;

/// Gravity never gets faster than this many ticks per step
pub const MIN_TICKS_PER_DROP: u32 = 2;

/// Every this many points, gravity speeds up by one tick
pub const SCORE_PER_SPEED_STEP: u32 = 500;

/// Flat bonus for any lock that clears at least one line
pub const LINE_CLEAR_BASE_SCORE: u32 = 25;

/// Multiplied by `2^lines` on a clearing lock
pub const LINE_CLEAR_UNIT_SCORE: u32 = 100;

/// Number of frames in the line-clear flash
pub const CLEAR_FLASH_FRAMES: u32 = 6;

/// Duration of a single line-clear flash frame
pub const CLEAR_FLASH_FRAME_MS: u32 = 80;

/// Number of entries kept on the leaderboard
pub const LEADERBOARD_SIZE: usize = 5;

/// Maximum length of a leaderboard name
pub const NAME_MAX_LEN: usize = 10;

/// Name used when the player submits an empty name
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// The seven tetromino piece kinds
///
/// Declaration order is the colour index order: the board tag of a locked
/// cell is `index() + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl PieceKind {
    /// All kinds in colour index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Colour index (0-6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single uppercase letter, used in logs and the side panel
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }
}

/// Rotation states in quarter turns
///
/// - **North**: spawn orientation (0)
/// - **East**: 90° clockwise (1)
/// - **South**: 180° (2)
/// - **West**: 90° counter-clockwise (3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Quarter turns from North (0-3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Build a rotation from any quarter-turn count; the value is taken modulo 4
    pub fn from_index(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// A cell on the playfield
///
/// The numeric tags match the persisted/diagnostic encoding:
/// `0` empty, `1..=7` locked piece colour, `8` marked for clearing, `9` wall/floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
    Clearing,
    Wall,
}

impl Cell {
    /// Numeric tag of this cell
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(kind) => kind.index() as u8 + 1,
            Cell::Clearing => 8,
            Cell::Wall => 9,
        }
    }

    /// Decode a numeric tag; unknown tags are rejected
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Cell::Empty),
            1..=7 => PieceKind::from_index(tag as usize - 1).map(Cell::Piece),
            8 => Some(Cell::Clearing),
            9 => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Game actions that can be applied to a running round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to the lowest fitting row and lock it this tick
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    RotateCw,
    /// Set the current piece aside (once per piece)
    Hold,
    /// Toggle pause state
    Pause,
}
