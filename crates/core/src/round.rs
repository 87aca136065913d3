//! Game round module - the state machine behind one play-through
//!
//! A [`GameRound`] owns the board, the falling piece, the next/hold slots, the
//! score and the rows waiting to be cleared. It is driven by [`GameRound::step`],
//! called once per fixed tick:
//!
//! 1. the gravity counter advances (unless paused),
//! 2. at most one input action is applied,
//! 3. if gravity is due (or a hard drop happened) the piece moves down one row
//!    or locks, completed rows are marked and the next piece spawns.
//!
//! Marked rows stay on the board until [`GameRound::finish_clear`] is called,
//! which the caller does after playing the clear animation.

use crate::board::Board;
use crate::geometry::{get_shape, PieceShape};
use crate::line_clear::{collapse_rows, mark_completed_rows, PendingRows};
use crate::rng::PieceSource;
use crate::scoring::{level, line_clear_score, ticks_per_drop};
use crate::types::{GameAction, PieceKind, Rotation, INITIAL_TICKS_PER_DROP, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Check if the piece fits on the board where it is
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(self.kind, self.rotation, self.x, self.y)
    }
}

/// Where the round is in its lifecycle.
///
/// `Spawning` and `Locking` are only held while [`GameRound::step`] runs;
/// between ticks a round is `Falling`, `Paused`, `Clearing` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    Spawning,
    Falling,
    Paused,
    Locking,
    Clearing,
    GameOver,
}

/// Emitted after every lock (consumed by observers such as the event log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
    pub score: u32,
}

/// One play-through, from the first spawn to game over
#[derive(Debug, Clone)]
pub struct GameRound<P: PieceSource> {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    hold: Option<PieceKind>,
    /// Set by a hold, cleared only when a piece spawns after a lock.
    held_this_piece: bool,
    score: u32,
    ticks_per_drop: u32,
    tick_counter: u32,
    paused: bool,
    phase: RoundPhase,
    pending: PendingRows,
    last_event: Option<LockEvent>,
    pieces_locked: u32,
    lines: u32,
    pieces: P,
}

impl<P: PieceSource> GameRound<P> {
    /// Start a round on an empty board
    pub fn new(pieces: P) -> Self {
        Self::with_board(Board::new(), pieces)
    }

    /// Start a round on a prepared board.
    ///
    /// If the first piece does not fit at the spawn position the round starts
    /// (and stays) in [`RoundPhase::GameOver`].
    pub fn with_board(board: Board, mut pieces: P) -> Self {
        let active = Tetromino::new(pieces.next_piece());
        let next = pieces.next_piece();
        let mut round = Self {
            board,
            active,
            next,
            hold: None,
            held_this_piece: false,
            score: 0,
            ticks_per_drop: INITIAL_TICKS_PER_DROP,
            tick_counter: 0,
            paused: false,
            phase: RoundPhase::Falling,
            pending: PendingRows::new(),
            last_event: None,
            pieces_locked: 0,
            lines: 0,
            pieces,
        };
        if !round.active.fits(&round.board) {
            round.phase = RoundPhase::GameOver;
        }
        round
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        !self.held_this_piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        level(self.score)
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Current gravity: ticks between forced down moves
    pub fn ticks_per_drop(&self) -> u32 {
        self.ticks_per_drop
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    /// Rows marked by the last lock and not yet removed
    pub fn pending_rows(&self) -> &[i8] {
        &self.pending
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the round by one tick.
    ///
    /// Returns true if a piece locked during this tick. A finished round and a
    /// round with rows still pending ignore the call.
    pub fn step(&mut self, input: Option<GameAction>) -> bool {
        if self.is_over() || !self.pending.is_empty() {
            return false;
        }

        if !self.paused {
            self.tick_counter += 1;
        }
        let mut force_down = self.tick_counter >= self.ticks_per_drop;

        if let Some(action) = input {
            let applied = self.apply_action(action);
            force_down |= applied && action == GameAction::HardDrop;
        }

        // A hold can end the round; nothing falls after that.
        if self.is_over() || self.paused || !force_down {
            return false;
        }
        self.tick_counter = 0;
        self.force_down()
    }

    /// Apply a single player action. Returns true if it changed the state.
    fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::HardDrop => {
                if !self.playable() {
                    return false;
                }
                self.drop_to_floor();
                true
            }
            GameAction::Hold => self.hold(),
        }
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.paused = !self.paused;
        self.phase = if self.paused {
            RoundPhase::Paused
        } else {
            RoundPhase::Falling
        };
        true
    }

    /// Try to move the active piece; rejected moves leave it where it is
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let moved = Tetromino {
            x: self.active.x + dx,
            y: self.active.y + dy,
            ..self.active
        };
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let rotated = Tetromino {
            rotation: self.active.rotation.rotate_cw(),
            ..self.active
        };
        if !rotated.fits(&self.board) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Lowest row the active piece fits at in its current column and rotation
    pub fn ghost_y(&self) -> i8 {
        let a = self.active;
        let mut y = a.y;
        while self.board.fits(a.kind, a.rotation, a.x, y + 1) {
            y += 1;
        }
        y
    }

    fn drop_to_floor(&mut self) {
        self.active.y = self.ghost_y();
    }

    /// Drop the active piece to the floor and lock it immediately.
    ///
    /// Equivalent to a hard drop input on a tick; returns true if it locked.
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        self.drop_to_floor();
        self.tick_counter = 0;
        self.force_down()
    }

    /// Set the active piece aside, once per piece.
    ///
    /// The first hold of a round stores the current piece and promotes the
    /// next one; later holds swap with the stored piece. Either way the new
    /// active piece starts over at the spawn position. If it does not fit
    /// there, the round ends.
    pub fn hold(&mut self) -> bool {
        if !self.playable() || self.held_this_piece {
            return false;
        }
        let kind = match self.hold.replace(self.active.kind) {
            Some(held) => held,
            None => {
                let promoted = self.next;
                self.next = self.pieces.next_piece();
                promoted
            }
        };
        self.active = Tetromino::new(kind);
        self.held_this_piece = true;
        if !self.active.fits(&self.board) {
            self.phase = RoundPhase::GameOver;
        }
        true
    }

    /// End the round without a top-out (player quit)
    pub fn abandon(&mut self) {
        self.phase = RoundPhase::GameOver;
    }

    /// Remove the rows marked by the last lock. Returns how many were removed.
    pub fn finish_clear(&mut self) -> usize {
        let removed = self.pending.len();
        collapse_rows(&mut self.board, &self.pending);
        self.pending.clear();
        if self.phase == RoundPhase::Clearing {
            self.phase = RoundPhase::Falling;
        }
        removed
    }

    fn playable(&self) -> bool {
        !self.paused && !self.is_over() && self.pending.is_empty()
    }

    /// Gravity step: move down one row, or lock and spawn the next piece.
    fn force_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return false;
        }

        let a = self.active;
        if !self.board.lock(a.kind, a.rotation, a.x, a.y) {
            self.phase = RoundPhase::GameOver;
            return false;
        }
        self.phase = RoundPhase::Locking;
        self.pieces_locked += 1;

        let rows = mark_completed_rows(&mut self.board, a.y);
        let points = line_clear_score(rows.len());
        self.score += points;
        self.lines += rows.len() as u32;
        self.ticks_per_drop = ticks_per_drop(self.score);
        self.pending = rows;

        self.last_event = Some(LockEvent {
            kind: a.kind,
            rows_cleared: self.pending.len() as u32,
            points,
            score: self.score,
        });

        self.spawn_next();
        true
    }

    fn spawn_next(&mut self) {
        self.phase = RoundPhase::Spawning;
        self.active = Tetromino::new(self.next);
        self.next = self.pieces.next_piece();
        self.held_this_piece = false;

        self.phase = if !self.active.fits(&self.board) {
            RoundPhase::GameOver
        } else if !self.pending.is_empty() {
            RoundPhase::Clearing
        } else {
            RoundPhase::Falling
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequencePieces;
    use crate::types::{Cell, FIELD_WIDTH};

    fn round_of(kind: PieceKind) -> GameRound<SequencePieces> {
        GameRound::new(SequencePieces::repeat(kind))
    }

    #[test]
    fn test_new_round() {
        let round = GameRound::new(SequencePieces::new([PieceKind::T, PieceKind::L]));
        assert_eq!(round.active(), Tetromino::new(PieceKind::T));
        assert_eq!(round.next_piece(), PieceKind::L);
        assert_eq!(round.hold_piece(), None);
        assert_eq!(round.score(), 0);
        assert_eq!(round.ticks_per_drop(), 20);
        assert_eq!(round.phase(), RoundPhase::Falling);
    }

    #[test]
    fn test_gravity_fires_on_threshold_tick() {
        let mut round = round_of(PieceKind::O);
        for _ in 0..19 {
            round.step(None);
        }
        assert_eq!(round.active().y, 0);
        assert_eq!(round.tick_counter(), 19);

        round.step(None);
        assert_eq!(round.active().y, 1);
        assert_eq!(round.tick_counter(), 0);
    }

    #[test]
    fn test_pause_freezes_counter_and_input() {
        let mut round = round_of(PieceKind::T);
        round.step(Some(GameAction::Pause));
        assert!(round.paused());
        assert_eq!(round.phase(), RoundPhase::Paused);
        let counter = round.tick_counter();

        for _ in 0..50 {
            round.step(Some(GameAction::MoveLeft));
        }
        assert_eq!(round.tick_counter(), counter);
        assert_eq!(round.active(), Tetromino::new(PieceKind::T));

        round.step(Some(GameAction::Pause));
        assert!(!round.paused());
        assert_eq!(round.phase(), RoundPhase::Falling);
    }

    #[test]
    fn test_walls_block_movement() {
        let mut round = round_of(PieceKind::O);
        let mut moved = 0;
        while round.try_move(-1, 0) {
            moved += 1;
        }
        // O occupies mask columns 1-2; the leftmost interior column is 1.
        assert_eq!(moved, 4);
        assert_eq!(round.active().x, 0);
    }

    #[test]
    fn test_rotation_is_rejected_without_kick() {
        let mut round = round_of(PieceKind::I);
        // Vertical I sits in mask column 2; at x=-1 it hugs the left wall.
        while round.try_move(-1, 0) {}
        assert_eq!(round.active().x, -1);
        // Horizontal I would need columns -1..=2, which hits the wall.
        assert!(!round.try_rotate());
        assert_eq!(round.active().rotation, Rotation::North);
        assert_eq!(round.active().x, -1);
    }

    #[test]
    fn test_hard_drop_locks_on_same_tick() {
        let mut round = round_of(PieceKind::O);
        assert!(round.step(Some(GameAction::HardDrop)));
        assert_eq!(round.pieces_locked(), 1);
        assert_eq!(round.board().get(5, 20), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(round.board().get(6, 19), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(round.active(), Tetromino::new(PieceKind::O));
        assert_eq!(round.tick_counter(), 0);
    }

    #[test]
    fn test_single_line_clear_scores_and_waits_for_animation() {
        let mut board = Board::new();
        // Fill row 20 except the two columns an O dropped at x=4 covers.
        for x in 1..FIELD_WIDTH as i8 - 1 {
            if x != 5 && x != 6 {
                board.set(x, 20, Cell::Piece(PieceKind::L));
            }
        }
        let mut round = GameRound::with_board(board, SequencePieces::repeat(PieceKind::O));
        round.hard_drop();

        assert_eq!(round.score(), 225);
        assert_eq!(round.pending_rows(), &[20]);
        assert_eq!(round.phase(), RoundPhase::Clearing);
        assert_eq!(round.board().get(3, 20), Some(Cell::Clearing));

        // No progress until the clear is finished.
        assert!(!round.step(Some(GameAction::MoveLeft)));
        assert_eq!(round.active().x, 4);

        assert_eq!(round.finish_clear(), 1);
        assert_eq!(round.phase(), RoundPhase::Falling);
        assert_eq!(round.board().get(5, 20), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(round.board().get(3, 20), Some(Cell::Empty));

        let event = round.take_last_event().unwrap();
        assert_eq!(event.rows_cleared, 1);
        assert_eq!(event.points, 225);
        assert!(round.take_last_event().is_none());
    }

    #[test]
    fn test_hold_once_per_piece() {
        let mut round = GameRound::new(SequencePieces::new([
            PieceKind::T,
            PieceKind::L,
            PieceKind::S,
            PieceKind::Z,
        ]));
        assert!(round.hold());
        assert_eq!(round.hold_piece(), Some(PieceKind::T));
        assert_eq!(round.active().kind, PieceKind::L);
        assert_eq!(round.next_piece(), PieceKind::S);

        assert!(!round.hold());
        assert_eq!(round.active().kind, PieceKind::L);

        round.hard_drop();
        assert_eq!(round.active().kind, PieceKind::S);
        assert!(round.can_hold());
        assert!(round.hold());
        assert_eq!(round.active().kind, PieceKind::T);
        assert_eq!(round.hold_piece(), Some(PieceKind::S));
    }

    #[test]
    fn test_hold_resets_to_spawn() {
        let mut round = round_of(PieceKind::T);
        round.try_move(1, 0);
        round.try_move(0, 1);
        round.try_rotate();
        round.hold();
        assert_eq!(round.active(), Tetromino::new(PieceKind::T));
    }

    #[test]
    fn test_blocked_spawn_ends_round() {
        let mut board = Board::new();
        board.set(6, 3, Cell::Piece(PieceKind::J));
        let round = GameRound::with_board(board, SequencePieces::repeat(PieceKind::I));
        assert!(round.is_over());
    }

    #[test]
    fn test_hold_into_blocked_spawn_on_gravity_tick_stays_over() {
        let mut board = Board::new();
        board.set(6, 3, Cell::Piece(PieceKind::J));
        let pieces = SequencePieces::new([PieceKind::O, PieceKind::I, PieceKind::O]);
        let mut round = GameRound::with_board(board, pieces);
        assert!(!round.is_over());

        for _ in 0..INITIAL_TICKS_PER_DROP - 1 {
            assert!(!round.step(None));
        }
        // Gravity is due on this tick, but the promoted I cannot spawn.
        assert!(!round.step(Some(GameAction::Hold)));

        assert!(round.is_over());
        assert_eq!(round.phase(), RoundPhase::GameOver);
        assert_eq!(round.pieces_locked(), 0);
        assert_eq!(round.take_last_event(), None);
        assert!(!round.step(None));
        assert!(round.is_over());
    }

    #[test]
    fn test_finished_round_ignores_steps() {
        let mut round = round_of(PieceKind::T);
        round.abandon();
        assert!(!round.step(Some(GameAction::HardDrop)));
        assert!(!round.toggle_pause());
        assert_eq!(round.pieces_locked(), 0);
    }
}
