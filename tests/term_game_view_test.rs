use term_tetris::core::{Board, GameRound, SequencePieces};
use term_tetris::scores::Leaderboard;
use term_tetris::term::{
    board_to_screen, render_leaderboard, FrameBuffer, GameView, PaletteColor, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use term_tetris::types::{Cell, GameAction, PieceKind};

#[test]
fn term_view_uses_fixed_frame_size() {
    let snap = GameRound::new(SequencePieces::repeat(PieceKind::T)).snapshot();
    let mut fb = FrameBuffer::new(3, 3);
    GameView::new().render_into(&snap, &mut fb);
    assert_eq!((fb.width(), fb.height()), (SCREEN_WIDTH, SCREEN_HEIGHT));
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(1, 20, Cell::Piece(PieceKind::J));
    let snap = GameRound::with_board(board, SequencePieces::repeat(PieceKind::O)).snapshot();
    let fb = GameView::new().render(&snap);

    let (x, y) = board_to_screen(1, 20).unwrap();
    assert_eq!((x, y), (4, 22));
    assert_eq!(fb.get(x, y).unwrap().ch, '[');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, ']');
    assert_eq!(fb.get(x, y).unwrap().style.fg, PaletteColor::LightBlue);
}

#[test]
fn term_view_shows_hold_preview_after_hold() {
    let mut round = GameRound::new(SequencePieces::new([PieceKind::O, PieceKind::T]));
    round.step(Some(GameAction::Hold));
    let fb = GameView::new().render(&round.snapshot());

    // O preview: mask cells (1,1),(2,1) at preview origin (32, 25).
    assert_eq!(&fb.row_text(26)[34..38], "[][]");
    assert_eq!(fb.get(34, 26).unwrap().style.fg, PaletteColor::Yellow);
}

#[test]
fn term_view_hides_piece_after_game_over() {
    let mut round = GameRound::new(SequencePieces::repeat(PieceKind::I));
    round.abandon();
    let fb = GameView::new().render(&round.snapshot());
    let (x, y) = board_to_screen(6, 0).unwrap();
    assert_eq!(fb.get(x, y).unwrap().ch, ' ');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, '.');
}

#[test]
fn term_view_empty_leaderboard_still_prompts() {
    let mut fb = FrameBuffer::new(1, 1);
    render_leaderboard(&Leaderboard::new(), &mut fb);
    assert!(fb.row_text(4).trim().is_empty());
    assert!(fb.row_text(12).contains("[ESC] to Quit"));
}
