//! Chess piece representation.

use crate::{Color, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the FEN character for this piece kind with the given color.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece kind and color.
    pub const fn from_fen_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    /// Material value in pawns. The king is priceless and counts as zero.
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Stable identity of a piece.
///
/// `origin` is the square where the piece entered the board. A promoted piece
/// keeps the pawn's origin and bumps `generation`, so it is a new identity that
/// is still traceable to the pawn it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub origin: Square,
    pub generation: u8,
}

impl PieceId {
    /// Mints the identity of a piece entering the board on `origin`.
    #[inline]
    pub const fn new(origin: Square) -> Self {
        PieceId {
            origin,
            generation: 0,
        }
    }

    /// Mints the identity of the piece that replaces this one on promotion.
    #[inline]
    pub const fn successor(self) -> Self {
        PieceId {
            origin: self.origin,
            generation: self.generation.wrapping_add(1),
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "{}", self.origin)
        } else {
            write!(f, "{}.{}", self.origin, self.generation)
        }
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
    /// Set once the piece has left its square; gates castling.
    pub has_moved: bool,
    pub id: PieceId,
}

impl Piece {
    /// Creates an unmoved piece whose identity is minted from its square.
    pub const fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
            id: PieceId::new(position),
        }
    }

    /// Returns this piece relocated to `to` and marked as moved.
    #[inline]
    pub const fn moved_to(self, to: Square) -> Self {
        Piece {
            position: to,
            has_moved: true,
            ..self
        }
    }

    /// Returns the piece that replaces this pawn when it promotes on `to`.
    #[inline]
    pub const fn promoted(self, kind: PieceKind, to: Square) -> Self {
        Piece {
            kind,
            color: self.color,
            position: to,
            has_moved: true,
            id: self.id.successor(),
        }
    }

    /// Returns the FEN character for this piece.
    #[inline]
    pub const fn to_fen_char(&self) -> char {
        self.kind.to_fen_char(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn piece_to_fen() {
        assert_eq!(PieceKind::Pawn.to_fen_char(Color::White), 'P');
        assert_eq!(PieceKind::Pawn.to_fen_char(Color::Black), 'p');
        assert_eq!(PieceKind::King.to_fen_char(Color::White), 'K');
        assert_eq!(PieceKind::Knight.to_fen_char(Color::Black), 'n');
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(
            PieceKind::from_fen_char('P'),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            PieceKind::from_fen_char('k'),
            Some((PieceKind::King, Color::Black))
        );
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }

    #[test]
    fn promotion_targets() {
        for kind in PieceKind::PROMOTIONS {
            assert!(kind.is_promotion_target());
        }
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }

    #[test]
    fn values() {
        let total: u32 = PieceKind::ALL.iter().map(|k| k.value()).sum();
        assert_eq!(total, 1 + 3 + 3 + 5 + 9);
    }

    #[test]
    fn moved_to_keeps_identity() {
        let knight = Piece::new(PieceKind::Knight, Color::White, sq("g1"));
        let moved = knight.moved_to(sq("f3"));
        assert_eq!(moved.position, sq("f3"));
        assert!(moved.has_moved);
        assert_eq!(moved.id, knight.id);
    }

    #[test]
    fn promotion_mints_new_identity() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("a2")).moved_to(sq("a7"));
        let queen = pawn.promoted(PieceKind::Queen, sq("a8"));
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        assert!(queen.has_moved);
        assert_ne!(queen.id, pawn.id);
        assert_eq!(queen.id.origin, pawn.id.origin);
        assert_eq!(queen.id.to_string(), "a2.1");
        assert_eq!(pawn.id.to_string(), "a2");
    }
}
