//! Attack detection: which squares a color threatens, and king safety.

use chess_board::{Board, Color, Piece, PieceKind, Square};

/// Knight jump offsets as (row, col) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets as (row, col) deltas.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook ray directions.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop ray directions.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns true if any piece of `by_color` could capture on `sq`.
///
/// This is raw threat: pins and the attacker's own king safety are ignored.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    attacked_by_pawn(board, sq, by_color)
        || attacked_by_knight(board, sq, by_color)
        || attacked_by_slider(board, sq, by_color)
        || attacked_by_king(board, sq, by_color)
}

/// Returns the square of the king of the given color.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board.find(PieceKind::King, color).map(|k| k.position)
}

/// Returns true if the king of the given color is attacked.
///
/// A board without that king is treated as not in check.
pub fn is_king_in_check(board: &Board, king_color: Color) -> bool {
    match find_king(board, king_color) {
        Some(king_sq) => is_square_attacked(board, king_sq, king_color.opposite()),
        None => false,
    }
}

/// Returns true if moving the piece on `from` to `to` leaves `color`'s king attacked.
///
/// The move is played on a scratch copy of the board. An en passant capture
/// also lifts the passed pawn and castling also relocates the rook, so
/// discovered attacks through those squares are seen.
pub fn would_move_result_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let Some(piece) = board.piece_at(from).copied() else {
        return false;
    };

    let mut scratch = board.clone();
    match piece.kind {
        PieceKind::Pawn if from.col() != to.col() && scratch.is_empty(to) => {
            if let Some(passed) = Square::new(from.row(), to.col()) {
                scratch.remove(passed);
            }
        }
        PieceKind::King if from.col().abs_diff(to.col()) == 2 => {
            let (rook_col, rook_target) = if to.col() > from.col() { (7, 5) } else { (0, 3) };
            if let (Some(rook_from), Some(rook_to)) =
                (from.with_col(rook_col), from.with_col(rook_target))
            {
                scratch.move_piece(rook_from, rook_to);
            }
        }
        _ => {}
    }
    scratch.move_piece(from, to);

    is_king_in_check(&scratch, color)
}

/// Removes every candidate destination that would leave the piece's own king attacked.
pub fn filter_legal_moves(board: &Board, piece: &Piece, candidates: Vec<Square>) -> Vec<Square> {
    candidates
        .into_iter()
        .filter(|&to| !would_move_result_in_check(board, piece.position, to, piece.color))
        .collect()
}

fn attacked_by_pawn(board: &Board, sq: Square, by_color: Color) -> bool {
    // An attacking pawn stands one step behind the target, from its own point of view.
    let row = sq.row() as i8 - by_color.pawn_direction();
    [-1i8, 1].into_iter().any(|d_col| {
        board
            .piece_at_coords(row, sq.col() as i8 + d_col)
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == by_color)
    })
}

fn attacked_by_knight(board: &Board, sq: Square, by_color: Color) -> bool {
    any_piece_at_offsets(board, sq, &KNIGHT_OFFSETS, PieceKind::Knight, by_color)
}

fn attacked_by_king(board: &Board, sq: Square, by_color: Color) -> bool {
    any_piece_at_offsets(board, sq, &KING_OFFSETS, PieceKind::King, by_color)
}

fn any_piece_at_offsets(
    board: &Board,
    sq: Square,
    offsets: &[(i8, i8)],
    kind: PieceKind,
    by_color: Color,
) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        sq.offset(d_row, d_col)
            .and_then(|target| board.piece_at(target))
            .is_some_and(|p| p.kind == kind && p.color == by_color)
    })
}

fn attacked_by_slider(board: &Board, sq: Square, by_color: Color) -> bool {
    let rays = ORTHOGONALS
        .iter()
        .map(|d| (d, PieceKind::Rook))
        .chain(DIAGONALS.iter().map(|d| (d, PieceKind::Bishop)));

    for (&(d_row, d_col), ray_kind) in rays {
        let mut current = sq.offset(d_row, d_col);
        while let Some(target) = current {
            if let Some(piece) = board.piece_at(target) {
                if piece.color == by_color
                    && (piece.kind == ray_kind || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = target.offset(d_row, d_col);
        }
    }

    false
}
