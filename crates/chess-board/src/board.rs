//! The 8x8 grid of optional pieces.

use crate::{Color, Piece, PieceKind, Square};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Back-row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess board: 64 cells, each empty or holding one piece.
///
/// The cell a piece occupies always equals its `position`. Cloning a board
/// copies every piece, so a clone never shares state with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                if let Some(sq) = Square::new(color.back_row(), col as u8) {
                    board.put(Piece::new(kind, color, sq));
                }
                if let Some(sq) = Square::new(color.pawn_row(), col as u8) {
                    board.put(Piece::new(PieceKind::Pawn, color, sq));
                }
            }
        }
        board
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].as_ref()
    }

    /// Returns the piece at signed coordinates; off-board coordinates hold nothing.
    #[inline]
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<&Piece> {
        Square::from_coords(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if a piece of the other color stands on the square.
    #[inline]
    pub fn has_opponent_piece(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color != color)
    }

    /// Returns true if a piece of the same color stands on the square.
    #[inline]
    pub fn has_friendly_piece(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color == color)
    }

    /// Places a piece on the square named by its `position`, returning whatever stood there.
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        let sq = piece.position;
        self.cells[sq.row() as usize][sq.col() as usize].replace(piece)
    }

    /// Removes and returns the piece on the square.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Relocates the piece on `from` to `to`, marking it moved.
    ///
    /// Returns the piece previously standing on `to`. Does nothing if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove(from)?;
        self.put(piece.moved_to(to))
    }

    /// Iterates over every piece, row by row from the eighth rank.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Returns the first piece of the given kind and color.
    pub fn find(&self, kind: PieceKind, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == kind)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            cells: [[Option<Piece>; 8]; 8],
        }

        let raw = Raw::deserialize(deserializer)?;
        for square in Square::all() {
            let cell = &raw.cells[square.row() as usize][square.col() as usize];
            if let Some(piece) = cell {
                if piece.position != square {
                    return Err(de::Error::custom(format_args!(
                        "piece on {} claims position {}",
                        square, piece.position
                    )));
                }
            }
        }
        Ok(Board { cells: raw.cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.count(), 0);
        assert!(Square::all().all(|s| board.is_empty(s)));
    }

    #[test]
    fn initial_board_layout() {
        let board = Board::initial();
        assert_eq!(board.count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);

        let king = board.piece_at(sq("e1")).unwrap();
        assert_eq!((king.kind, king.color), (PieceKind::King, Color::White));
        let queen = board.piece_at(sq("d8")).unwrap();
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
        assert_eq!(board.piece_at(sq("a7")).unwrap().kind, PieceKind::Pawn);
        assert!(board.is_empty(sq("e4")));
        assert!(board.pieces().all(|p| !p.has_moved));
    }

    #[test]
    fn cells_match_positions() {
        let board = Board::initial();
        for s in Square::all() {
            if let Some(p) = board.piece_at(s) {
                assert_eq!(p.position, s);
            }
        }
    }

    #[test]
    fn initial_ids_are_unique() {
        let board = Board::initial();
        let mut ids: Vec<_> = board.pieces().map(|p| p.id).collect();
        ids.sort_by_key(|id| (id.origin.row(), id.origin.col()));
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn friendly_and_opponent() {
        let board = Board::initial();
        assert!(board.has_friendly_piece(sq("a1"), Color::White));
        assert!(board.has_opponent_piece(sq("a8"), Color::White));
        assert!(!board.has_opponent_piece(sq("e4"), Color::White));
        assert!(!board.has_friendly_piece(sq("e4"), Color::White));
    }

    #[test]
    fn off_board_coordinates_hold_nothing() {
        let board = Board::initial();
        assert!(board.piece_at_coords(-1, 0).is_none());
        assert!(board.piece_at_coords(0, 8).is_none());
        assert!(board.piece_at_coords(0, 0).is_some());
    }

    #[test]
    fn move_piece_captures() {
        let mut board = Board::initial();
        assert!(board.move_piece(sq("e2"), sq("e4")).is_none());
        let pawn = board.piece_at(sq("e4")).unwrap();
        assert!(pawn.has_moved);
        assert_eq!(pawn.position, sq("e4"));
        assert!(board.is_empty(sq("e2")));

        let captured = board.move_piece(sq("e4"), sq("e7")).unwrap();
        assert_eq!(captured.color, Color::Black);
        assert_eq!(board.count(), 31);
    }

    #[test]
    fn move_from_empty_square_is_noop() {
        let mut board = Board::initial();
        assert!(board.move_piece(sq("e4"), sq("e5")).is_none());
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::initial();
        let mut copy = board.clone();
        copy.remove(sq("e1"));
        assert!(board.piece_at(sq("e1")).is_some());
        assert!(copy.piece_at(sq("e1")).is_none());
    }

    #[test]
    fn find_king() {
        let board = Board::initial();
        assert_eq!(
            board.find(PieceKind::King, Color::Black).map(|k| k.position),
            Some(sq("e8"))
        );
        assert!(Board::empty().find(PieceKind::King, Color::White).is_none());
    }

    #[test]
    fn deserialize_round_trip() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn deserialize_rejects_misplaced_piece() {
        let mut value = serde_json::to_value(Board::initial()).unwrap();
        // The e1 king copied onto e4 still says it stands on e1.
        value["cells"][4][4] = value["cells"][7][4].clone();
        assert!(serde_json::from_value::<Board>(value).is_err());
    }
}
