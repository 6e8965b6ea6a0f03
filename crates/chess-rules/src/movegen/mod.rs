//! Move generation.
//!
//! Destinations are produced per piece: the kind-specific movement pattern,
//! plus castling and en passant where eligible, then filtered so the mover's
//! own king is never left attacked. Output is always fully legal.

pub mod attacks;
pub mod special;

use chess_board::{Board, Color, Move, Piece, PieceKind, Square};

use attacks::{filter_legal_moves, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use special::{generate_castling_moves, generate_en_passant_moves};

/// Generates every legal destination for `piece`.
///
/// `last_move` is the most recent move in the game, needed for en passant.
pub fn generate_moves(board: &Board, piece: &Piece, last_move: Option<&Move>) -> Vec<Square> {
    let candidates = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece, last_move),
        PieceKind::Knight => step_moves(board, piece, &KNIGHT_OFFSETS),
        PieceKind::King => {
            let mut moves = step_moves(board, piece, &KING_OFFSETS);
            moves.extend(generate_castling_moves(board, piece));
            moves
        }
        PieceKind::Bishop => sliding_moves(board, piece, &DIAGONALS),
        PieceKind::Rook => sliding_moves(board, piece, &ORTHOGONALS),
        PieceKind::Queen => {
            let mut moves = sliding_moves(board, piece, &ORTHOGONALS);
            moves.extend(sliding_moves(board, piece, &DIAGONALS));
            moves
        }
    };

    filter_legal_moves(board, piece, candidates)
}

/// Returns true if `target` is a legal destination for `piece`.
pub fn is_valid_move(board: &Board, piece: &Piece, target: Square, last_move: Option<&Move>) -> bool {
    generate_moves(board, piece, last_move).contains(&target)
}

/// Returns every legal (from, to) pair for the given color.
pub fn legal_moves(board: &Board, color: Color, last_move: Option<&Move>) -> Vec<(Square, Square)> {
    board
        .pieces_of(color)
        .flat_map(|piece| {
            generate_moves(board, piece, last_move)
                .into_iter()
                .map(move |to| (piece.position, to))
        })
        .collect()
}

/// Returns true if the given color has at least one legal move.
pub fn has_legal_moves(board: &Board, color: Color, last_move: Option<&Move>) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !generate_moves(board, piece, last_move).is_empty())
}

fn pawn_moves(board: &Board, pawn: &Piece, last_move: Option<&Move>) -> Vec<Square> {
    let mut moves = Vec::new();
    let from = pawn.position;
    let dir = pawn.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        moves.push(one);

        if from.row() == pawn.color.pawn_row() {
            if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| board.is_empty(sq)) {
                moves.push(two);
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(dir, d_col) {
            if board.has_opponent_piece(target, pawn.color) {
                moves.push(target);
            }
        }
    }

    moves.extend(generate_en_passant_moves(pawn, last_move));
    moves
}

fn step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| piece.position.offset(d_row, d_col))
        .filter(|&sq| !board.has_friendly_piece(sq, piece.color))
        .collect()
}

fn sliding_moves(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();

    for &(d_row, d_col) in directions {
        let mut current = piece.position.offset(d_row, d_col);
        while let Some(sq) = current {
            if board.has_friendly_piece(sq, piece.color) {
                break;
            }
            moves.push(sq);
            if board.has_opponent_piece(sq, piece.color) {
                break;
            }
            current = sq.offset(d_row, d_col);
        }
    }

    moves
}
