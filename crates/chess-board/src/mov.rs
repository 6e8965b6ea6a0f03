//! Move records.

use crate::{Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move as it was played, appended to game history.
///
/// `piece` is the snapshot of the moving piece after the move, so for a
/// promotion it is already the promoted piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_pawn_double_move: bool,
    /// Kind chosen when a pawn promoted.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a plain move record with no special flags.
    pub fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            is_check: false,
            is_checkmate: false,
            is_castle: false,
            is_en_passant: false,
            is_pawn_double_move: false,
            promotion: None,
        }
    }

    /// Returns true if this move promoted a pawn.
    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move captured a piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if a pawn made this move, including a promoting pawn.
    #[inline]
    pub fn is_pawn_move(&self) -> bool {
        self.piece.kind == PieceKind::Pawn || self.is_promotion()
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinate(&self) -> String {
        let promo = match self.promotion {
            Some(PieceKind::Knight) => "n",
            Some(PieceKind::Bishop) => "b",
            Some(PieceKind::Rook) => "r",
            Some(PieceKind::Queen) => "q",
            _ => "",
        };
        format!("{}{}{}", self.from, self.to, promo)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
