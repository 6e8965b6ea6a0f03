//! Board model for chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! collaborators:
//! - [`Color`], [`PieceKind`], [`PieceId`], and [`Piece`] for pieces
//! - [`Square`] for board coordinates (row 0 is the eighth rank)
//! - [`Board`], the 8x8 grid, with FEN piece-placement parsing and serialization
//! - [`Move`], the immutable record of a played move

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::PlacementError;
pub use mov::Move;
pub use piece::{Piece, PieceId, PieceKind};
pub use square::{is_on_board, Square};
