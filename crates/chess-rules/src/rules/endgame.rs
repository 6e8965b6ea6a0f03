//! Checkmate, stalemate, and insufficient-material detection.

use super::GameStatus;
use crate::movegen::attacks::is_king_in_check;
use crate::movegen::has_legal_moves;
use chess_board::{Board, Color, Move, PieceKind};

/// Decides the status of `color_to_move` on `board`.
///
/// `last_move` is the move that produced the board, so an en passant reply
/// counts as a legal move.
pub fn determine_status(board: &Board, color_to_move: Color, last_move: Option<&Move>) -> GameStatus {
    let can_move = has_legal_moves(board, color_to_move, last_move);
    let in_check = is_king_in_check(board, color_to_move);

    match (can_move, in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) if is_insufficient_material(board) => GameStatus::Draw,
        (true, false) => GameStatus::Active,
    }
}

/// Returns true if neither side has enough material to mate.
///
/// Covers king against king, and king with a single bishop or knight
/// against a bare king. Bishops of the same square color on both sides are
/// not recognised.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut white = Vec::new();
    let mut black = Vec::new();
    for piece in board.pieces().filter(|p| p.kind != PieceKind::King) {
        match piece.color {
            Color::White => white.push(piece.kind),
            Color::Black => black.push(piece.kind),
        }
    }

    match (white.as_slice(), black.as_slice()) {
        ([], []) => true,
        ([single], []) | ([], [single]) => {
            matches!(single, PieceKind::Bishop | PieceKind::Knight)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    #[test]
    fn startpos_is_active() {
        assert_eq!(
            determine_status(&Board::initial(), Color::White, None),
            GameStatus::Active
        );
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
        assert_eq!(determine_status(&b, Color::White, None), GameStatus::Checkmate);
    }

    #[test]
    fn queen_stalemate() {
        let b = board("7k/5K2/6Q1/8/8/8/8/8");
        assert_eq!(determine_status(&b, Color::Black, None), GameStatus::Stalemate);
    }

    #[test]
    fn check_with_escape() {
        let b = board("4k3/8/8/8/8/8/8/R3K3");
        assert_eq!(determine_status(&b, Color::Black, None), GameStatus::Active);
        let b = board("R3k3/8/8/8/8/8/8/4K3");
        assert_eq!(determine_status(&b, Color::Black, None), GameStatus::Check);
    }

    #[test]
    fn bare_kings_are_drawn() {
        let b = board("4k3/8/8/8/8/8/8/4K3");
        assert!(is_insufficient_material(&b));
        assert_eq!(determine_status(&b, Color::White, None), GameStatus::Draw);
    }

    #[test]
    fn single_minor_piece_is_insufficient() {
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/2B1K3")));
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/1n2K3")));
    }

    #[test]
    fn rook_or_pawn_is_sufficient() {
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/R3K3")));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/4P3/4K3")));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/1NB1K3")));
    }

    #[test]
    fn opposing_bishops_are_not_recognised() {
        assert!(!is_insufficient_material(&board("2b1k3/8/8/8/8/8/8/2B1K3")));
    }

    #[test]
    fn check_beats_insufficient_material() {
        let b = board("7k/5KB1/8/8/8/8/8/8");
        assert!(is_insufficient_material(&b));
        assert_eq!(determine_status(&b, Color::Black, None), GameStatus::Check);
    }
}
