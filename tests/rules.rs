use noughts::{Board, Cell, InvalidMoveError, Move, Player};
use noughts::perft::reachable_positions;
use pretty_assertions::assert_eq;

fn board(s: &str) -> Board { s.parse().expect("valid board") }

#[test]
fn initial_board_is_empty_and_x_to_move() {
    let b = Board::initial();
    assert_eq!(b, Board::default());
    assert_eq!(b.empty_count(), 9);
    assert_eq!(b.current_player(), Some(Player::X));
    assert_eq!(b.legal_moves().map(|m| m.len()), Some(9));
    assert_eq!(b.winner(), None);
    assert!(!b.is_terminal());
}

#[test]
fn turn_alternates_with_empty_count() {
    let b = Board::initial().apply(Move::new(0, 0)).unwrap();
    assert_eq!(b.current_player(), Some(Player::O));
    let b = b.apply(Move::new(1, 1)).unwrap();
    assert_eq!(b.current_player(), Some(Player::X));
}

#[test]
fn apply_marks_cell_and_leaves_input_untouched() {
    let b0 = Board::initial();
    let before = b0;
    let b1 = b0.apply(Move::new(0, 0)).unwrap();
    assert_eq!(b0, before);
    assert_eq!(b1.cell(0, 0), Some(Cell::Mark(Player::X)));
    assert_eq!(b1.empty_count(), 8);
    assert_eq!(b1.to_string(), "X..\n...\n...");
    // same pre-apply board, same move: same fresh result
    let again = b0.apply(Move::new(0, 0)).unwrap();
    assert_eq!(again, b1);
    assert_eq!(b0, Board::initial());
}

#[test]
fn apply_rejects_occupied_and_out_of_range() {
    let b = Board::initial().apply(Move::new(1, 1)).unwrap();
    assert_eq!(b.apply(Move::new(1, 1)), Err(InvalidMoveError { row: 1, col: 1 }));
    assert_eq!(b.apply(Move::new(0, 3)), Err(InvalidMoveError { row: 0, col: 3 }));
    assert_eq!(b.apply(Move::new(7, 7)), Err(InvalidMoveError { row: 7, col: 7 }));
}

#[test]
fn apply_rejects_every_move_on_terminal_board() {
    let won = board("XXX/OO./...");
    assert!(won.is_terminal());
    assert_eq!(won.legal_moves(), None);
    assert_eq!(won.current_player(), None);
    for i in 0..9 {
        let mv = Move::from_index(i).unwrap();
        assert!(won.apply(mv).is_err(), "move {mv} accepted on finished board");
    }
}

#[test]
fn apply_fails_exactly_for_moves_outside_legal_moves() {
    let b = board("XO./.X./..O");
    let legal = b.legal_moves().unwrap();
    for row in 0..4 {
        for col in 0..4 {
            let mv = Move::new(row, col);
            assert_eq!(b.apply(mv).is_ok(), legal.contains(&mv), "mismatch at {mv}");
        }
    }
}

#[test]
fn top_row_of_x_wins() {
    let b = board("XXX/.../...");
    assert_eq!(b.winner(), Some(Player::X));
    assert!(b.is_terminal());
    assert_eq!(b.utility(), 1);
}

#[test]
fn full_board_without_line_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert_eq!(b.winner(), None);
    assert!(b.is_full());
    assert!(b.is_terminal());
    assert_eq!(b.utility(), 0);
    assert_eq!(b.legal_moves(), None);
}

#[test]
fn no_winner_distinguishes_ongoing_from_draw_via_terminal() {
    let ongoing = board("XO./.../...");
    let draw = board("XOX/XOO/OXX");
    assert_eq!(ongoing.winner(), draw.winner());
    assert!(!ongoing.is_terminal());
    assert!(draw.is_terminal());
    assert_eq!(ongoing.empty_count(), 7);
    assert_eq!(draw.empty_count(), 0);
}

#[test]
fn winner_checks_columns_and_diagonals() {
    assert_eq!(board("O.X/O.X/OX.").winner(), Some(Player::O));
    assert_eq!(board("X.O/.XO/..X").winner(), Some(Player::X));
    assert_eq!(board("X.O/XO./O.X").winner(), Some(Player::O));
    assert_eq!(board("X.O/XO./O.X").utility(), -1);
}

#[test]
fn winner_on_full_board_beats_draw() {
    let b = board("XOX/OXO/OXX");
    assert_eq!(b.winner(), Some(Player::X));
    assert_eq!(b.utility(), 1);
}

#[test]
fn reachable_boards_keep_piece_balance() {
    for b in reachable_positions(&Board::initial()) {
        let diff = b.count(Player::X) as i64 - b.count(Player::O) as i64;
        assert!(diff == 0 || diff == 1, "unbalanced board:\n{b}");
        // terminal iff no legal moves are offered
        assert_eq!(b.is_terminal(), b.legal_moves().is_none());
        if let Some(moves) = b.legal_moves() {
            assert!(!moves.is_empty(), "non-terminal board without moves:\n{b}");
        }
    }
}
