use crate::line_clear::PendingRows;
use crate::rng::PieceSource;
use crate::round::{GameRound, RoundPhase, Tetromino};
use crate::types::{Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Board grid as seen by views, walls included
pub type BoardGrid = [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

/// Read-only copy of everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub board: BoardGrid,
    pub active: Option<Tetromino>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub ticks_per_drop: u32,
    pub paused: bool,
    pub phase: RoundPhase,
    pub pending_rows: PendingRows,
}

impl RoundSnapshot {
    pub fn playable(&self) -> bool {
        matches!(self.phase, RoundPhase::Falling)
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            hold: None,
            score: 0,
            level: 1,
            lines: 0,
            ticks_per_drop: 0,
            paused: false,
            phase: RoundPhase::Falling,
            pending_rows: PendingRows::new(),
        }
    }
}

impl<P: PieceSource> GameRound<P> {
    /// Copy the round state into an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board().rows()) {
            dst.copy_from_slice(src);
        }

        // A topped-out piece overlaps the stack; there is nothing to draw.
        let alive = !self.is_over();
        out.active = alive.then(|| self.active());
        out.ghost_y = alive.then(|| self.ghost_y());
        out.next = self.next_piece();
        out.hold = self.hold_piece();
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.ticks_per_drop = self.ticks_per_drop();
        out.paused = self.paused();
        out.phase = self.phase();
        out.pending_rows.clear();
        out.pending_rows.extend(self.pending_rows().iter().copied());
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequencePieces;

    #[test]
    fn snapshot_copies_walls_and_piece() {
        let round = GameRound::new(SequencePieces::new([PieceKind::S, PieceKind::J]));
        let snap = round.snapshot();
        assert_eq!(snap.board[21][5], Cell::Wall);
        assert_eq!(snap.board[3][0], Cell::Wall);
        assert_eq!(snap.board[3][5], Cell::Empty);
        assert_eq!(snap.active.map(|a| a.kind), Some(PieceKind::S));
        assert_eq!(snap.next, PieceKind::J);
        assert!(snap.playable());
    }

    #[test]
    fn snapshot_of_finished_round_has_no_piece() {
        let mut round = GameRound::new(SequencePieces::repeat(PieceKind::I));
        round.abandon();
        let snap = round.snapshot();
        assert!(snap.active.is_none());
        assert!(snap.ghost_y.is_none());
        assert_eq!(snap.phase, RoundPhase::GameOver);
    }
}
