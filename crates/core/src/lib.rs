//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on the terminal, the keyboard or the filesystem, making it:
//!
//! - **Deterministic**: Same piece source produces identical rounds
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Fast**: No allocation on the tick path
//!
//! # Module Structure
//!
//! - [`geometry`]: 4x4 piece masks and the index-algebra rotation resolver
//! - [`board`]: 12x22 walled playfield with collision and locking
//! - [`line_clear`]: completed row marking and compaction
//! - [`scoring`]: line clear points, gravity speed and level
//! - [`rng`]: piece source capability (uniform with replacement, scripted)
//! - [`round`]: one play-through, driven tick by tick
//! - [`snapshot`]: read-only copy of a round for rendering
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: every piece is drawn independently from the seven kinds
//! - **Kick-less Rotation**: clockwise only; a blocked rotation is simply rejected
//! - **Instant Lock**: a piece locks on the first gravity step it cannot move down
//! - **Ghost Piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per piece)
//! - **Scoring**: `25 + 2^lines * 100` per clearing lock
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{GameRound, SequencePieces};
//! use term_tetris_types::{GameAction, PieceKind};
//!
//! let mut round = GameRound::new(SequencePieces::repeat(PieceKind::I));
//!
//! round.step(Some(GameAction::MoveRight));
//! round.step(Some(GameAction::RotateCw));
//! assert!(round.step(Some(GameAction::HardDrop)));
//!
//! assert_eq!(round.pieces_locked(), 1);
//! assert_eq!(round.score(), 0);
//! ```
//!
//! # Timing
//!
//! The round counts ticks, not milliseconds. The caller sleeps a fixed
//! interval between calls to [`GameRound::step`](round::GameRound::step);
//! gravity fires every [`GameRound::ticks_per_drop`](round::GameRound::ticks_per_drop) ticks.

pub mod board;
pub mod geometry;
pub mod line_clear;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use geometry::{get_shape, rotate_index, PieceShape};
pub use line_clear::PendingRows;
pub use rng::{PieceSource, SequencePieces, SimpleRng, UniformPieces};
pub use round::{GameRound, LockEvent, RoundPhase, Tetromino};
pub use scoring::{line_clear_score, ticks_per_drop};
pub use snapshot::{BoardGrid, RoundSnapshot};
