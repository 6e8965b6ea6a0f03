//! Castling, en passant, and promotion.
//!
//! Each special move has its own preconditions on top of ordinary movement,
//! and its own board mutation.

use super::attacks::is_square_attacked;
use crate::MoveError;
use chess_board::{Board, Move, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    /// Toward the h-file (O-O).
    Kingside,
    /// Toward the a-file (O-O-O).
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    const fn king_path(self) -> [u8; 2] {
        match self {
            CastleSide::Kingside => [5, 6],
            CastleSide::Queenside => [3, 2],
        }
    }

    /// The rook move paired with a king castling from `king_from`.
    pub fn rook_move(self, king_from: Square) -> Option<RookMove> {
        Some(RookMove {
            from: king_from.with_col(self.rook_col())?,
            to: king_from.with_col(self.rook_target_col())?,
        })
    }

    /// Returns the side a two-column king move castles toward.
    pub fn of_king_move(from: Square, to: Square) -> Option<Self> {
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// The rook relocation that accompanies a castling king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookMove {
    pub from: Square,
    pub to: Square,
}

/// Checks whether `king` may castle toward `side`, returning the rook move if so.
///
/// The king and the rook must both be unmoved, every square between them empty,
/// and the king must not be attacked on its square, the square it crosses, or
/// the square it lands on.
pub fn can_castle(board: &Board, king: &Piece, side: CastleSide) -> Option<RookMove> {
    if king.kind != PieceKind::King || king.has_moved {
        return None;
    }

    let row = king.color.back_row();
    if king.position.row() != row || king.position.col() != 4 {
        return None;
    }

    let them = king.color.opposite();
    if is_square_attacked(board, king.position, them) {
        return None;
    }

    let rook_from = Square::new(row, side.rook_col())?;
    let rook = board.piece_at(rook_from)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let (low, high) = match side {
        CastleSide::Kingside => (5, 7),
        CastleSide::Queenside => (1, 4),
    };
    for col in low..high {
        if !board.is_empty(Square::new(row, col)?) {
            return None;
        }
    }

    for col in side.king_path() {
        if is_square_attacked(board, Square::new(row, col)?, them) {
            return None;
        }
    }

    side.rook_move(king.position)
}

/// Returns the king's destination for every side it may castle toward.
pub fn generate_castling_moves(board: &Board, king: &Piece) -> Vec<Square> {
    CastleSide::BOTH
        .into_iter()
        .filter(|&side| can_castle(board, king, side).is_some())
        .filter_map(|side| king.position.with_col(side.king_target_col()))
        .collect()
}

/// Returns true if the move is a king stepping two columns.
#[inline]
pub fn is_castling_move(piece: &Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::King && CastleSide::of_king_move(from, to).is_some()
}

/// Moves the king from `king_from` to `king_to` and its rook alongside it.
///
/// Returns the rook move, or `None` (leaving the board untouched) if the
/// castling is not legal.
pub fn execute_castling(board: &mut Board, king_from: Square, king_to: Square) -> Option<RookMove> {
    let king = *board.piece_at(king_from)?;
    let side = CastleSide::of_king_move(king_from, king_to)?;
    let rook_move = can_castle(board, &king, side)?;

    board.move_piece(king_from, king_to);
    board.move_piece(rook_move.from, rook_move.to);
    Some(rook_move)
}

/// Returns true if `pawn` may capture en passant onto `target`.
///
/// Only the move immediately after the enemy pawn's two-square advance
/// qualifies, so the last move is the whole context needed.
pub fn can_capture_en_passant(pawn: &Piece, target: Square, last_move: Option<&Move>) -> bool {
    let Some(last) = last_move else {
        return false;
    };
    if pawn.kind != PieceKind::Pawn
        || last.piece.kind != PieceKind::Pawn
        || last.piece.color == pawn.color
        || last.from.row().abs_diff(last.to.row()) != 2
    {
        return false;
    }

    let landed = last.to;
    if landed.row() != pawn.position.row() || landed.col().abs_diff(pawn.position.col()) != 1 {
        return false;
    }

    let behind = landed.offset(pawn.color.pawn_direction(), 0);
    behind == Some(target)
}

/// Returns the en passant destinations available to `pawn`.
pub fn generate_en_passant_moves(pawn: &Piece, last_move: Option<&Move>) -> Vec<Square> {
    if last_move.is_none() {
        return Vec::new();
    }
    [-1i8, 1]
        .into_iter()
        .filter_map(|d_col| pawn.position.offset(pawn.color.pawn_direction(), d_col))
        .filter(|&target| can_capture_en_passant(pawn, target, last_move))
        .collect()
}

/// Returns true if the move is a pawn capturing diagonally onto an empty square.
#[inline]
pub fn is_en_passant_move(board: &Board, piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && piece.position.col() != to.col() && board.is_empty(to)
}

/// Moves `pawn` onto `target` and removes the pawn it passes.
///
/// The passed pawn stands on the capturing pawn's row, in the target's column.
pub fn execute_en_passant(board: &mut Board, pawn: &Piece, target: Square) -> Option<Piece> {
    let captured = Square::new(pawn.position.row(), target.col()).and_then(|sq| board.remove(sq));
    board.move_piece(pawn.position, target);
    captured
}

/// Returns true if `pawn` reaches its promotion row on `target`.
#[inline]
pub fn is_promotion_move(pawn: &Piece, target: Square) -> bool {
    pawn.kind == PieceKind::Pawn && target.row() == pawn.color.promotion_row()
}

/// Returns the kinds a pawn may promote to.
#[inline]
pub const fn promotion_options() -> [PieceKind; 4] {
    PieceKind::PROMOTIONS
}

/// Replaces `pawn` with a new piece of `kind` standing on `target`.
///
/// Whatever stood on `target` is overwritten; callers read captures first.
pub fn execute_promotion(
    board: &mut Board,
    pawn: &Piece,
    target: Square,
    kind: PieceKind,
) -> Result<Piece, MoveError> {
    if !kind.is_promotion_target() {
        return Err(MoveError::InvalidPromotion(kind));
    }

    let promoted = pawn.promoted(kind, target);
    board.remove(pawn.position);
    board.put(promoted);
    Ok(promoted)
}
