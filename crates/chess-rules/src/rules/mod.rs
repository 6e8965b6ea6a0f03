//! Game status, results, and the classifiers that decide them.
//!
//! [`determine_status`] looks at a single board. The history-based draws
//! ([`is_fifty_move_rule`], [`is_threefold_repetition`]) need the whole game
//! and are applied by the caller after each move through [`adjudicate_draws`].

mod draw;
mod endgame;

pub use draw::{adjudicate_draws, is_fifty_move_rule, is_threefold_repetition, FIFTY_MOVE_PLIES};
pub use endgame::{determine_status, is_insufficient_material};

use chess_board::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Play continues and the side to move is not in check.
    Active,
    /// The side to move is in check but has a legal reply.
    Check,
    /// The side to move is in check with no legal reply.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// The game is drawn; see [`DrawReason`].
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves should be accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    /// No legal moves but not in check.
    Stalemate,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
    /// 100 half-moves without a pawn move or capture.
    FiftyMoveRule,
    /// The same placement occurred three times.
    ThreefoldRepetition,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
}

impl GameResult {
    /// The result of `color` delivering mate.
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}
