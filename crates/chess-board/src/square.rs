//! Board square representation.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Returns true if the coordinates lie on the 8x8 board.
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is the eighth rank and row 7 the first rank; column 0 is the a-file.
/// A `Square` is always on the board: every constructor bounds-checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column, or `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, or `None` if they are off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Returns the row (0 = eighth rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square shifted by the given deltas, if it stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::from_coords(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Returns the square on the same row at another column.
    #[inline]
    pub const fn with_col(self, col: u8) -> Option<Self> {
        Self::new(self.row, col)
    }

    /// Returns the file letter of this square.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit of this square.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares, row by row from the eighth rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            row: u8,
            col: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Square::new(raw.row, raw.col).ok_or_else(|| {
            de::Error::custom(format_args!(
                "square ({}, {}) is off the board",
                raw.row, raw.col
            ))
        })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_checks_bounds() {
        let e4: Square = serde_json::from_str(r#"{"row":4,"col":4}"#).unwrap();
        assert_eq!(e4, Square::from_algebraic("e4").unwrap());
        assert_eq!(serde_json::to_string(&e4).unwrap(), r#"{"row":4,"col":4}"#);

        assert!(serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"row":0,"col":8}"#).is_err());
    }

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn bounds() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(!is_on_board(-1, 3));
        assert!(!is_on_board(3, 8));
        assert_eq!(Square::from_coords(-1, 0), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("a1"), Square::new(7, 0));
        assert_eq!(Square::from_algebraic("e4"), Square::new(4, 4));
        assert_eq!(Square::from_algebraic("H1"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(7, 0).unwrap().to_algebraic(), "a1");
        assert_eq!(Square::new(0, 7).unwrap().to_algebraic(), "h8");
        assert_eq!(format!("{}", Square::new(4, 4).unwrap()), "e4");
        assert_eq!(format!("{:?}", Square::new(4, 4).unwrap()), "Square(e4)");
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(-1, 1), Square::from_algebraic("b2"));
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_algebraic(), "a8");
        assert_eq!(squares[63].to_algebraic(), "h1");
    }
}
