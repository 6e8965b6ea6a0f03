//! FEN piece-placement parsing and serialization.

use crate::{Board, Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

impl Board {
    /// Piece placement of the standard starting position.
    pub const STARTING_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses the piece-placement field of a FEN string.
    ///
    /// A king, rook, or pawn counts as unmoved only on its home square; every
    /// other piece is unmoved. Identities are minted from the squares.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        validate_placement(placement)?;

        let mut board = Board::empty();
        for (row, rank_str) in placement.split('/').enumerate() {
            let mut col = 0u8;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as u8;
                } else if let Some((kind, color)) = PieceKind::from_fen_char(c) {
                    if let Some(sq) = Square::new(row as u8, col) {
                        let mut piece = Piece::new(kind, color, sq);
                        piece.has_moved = !is_home_square(kind, color, sq);
                        board.put(piece);
                    }
                    col += 1;
                }
            }
        }
        Ok(board)
    }

    /// Serializes the board as the piece-placement field of a FEN string.
    ///
    /// Two boards have the same placement exactly when every square holds the
    /// same color and kind, so this also serves as a position key.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

fn is_home_square(kind: PieceKind, color: Color, sq: Square) -> bool {
    match kind {
        PieceKind::Pawn => sq.row() == color.pawn_row(),
        PieceKind::King => sq.row() == color.back_row() && sq.col() == 4,
        PieceKind::Rook => sq.row() == color.back_row() && (sq.col() == 0 || sq.col() == 7),
        _ => true,
    }
}

fn validate_placement(placement: &str) -> Result<(), PlacementError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::InvalidRankCount(ranks.len()));
    }

    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - i as u8;
        let mut squares = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                squares += digit;
            } else if PieceKind::from_fen_char(c).is_some() {
                squares += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { character: c, rank });
            }
        }
        if squares != 8 {
            return Err(PlacementError::InvalidRankLength { rank, squares });
        }
    }

    Ok(())
}
