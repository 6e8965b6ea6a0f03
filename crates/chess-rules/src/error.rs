use crate::rules::GameStatus;
use chess_board::{Color, PieceKind, Square};
use thiserror::Error;

/// Reasons a move request is rejected.
///
/// The state the request was made against is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("piece on {square} is {found}, but it is {expected}'s turn")]
    WrongTurn {
        square: Square,
        expected: Color,
        found: Color,
    },

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("promotion {from}{to} is pending")]
    PromotionPending { from: Square, to: Square },

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    #[error("game is over ({0})")]
    GameOver(GameStatus),
}
