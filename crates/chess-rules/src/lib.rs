//! Standard chess rules over a [`chess_board::Board`].
//!
//! This crate provides:
//! - Attack detection and fully legal move generation ([`movegen`])
//! - Castling, en passant and promotion ([`movegen::special`])
//! - [`execute_move`] - the pure state transition of a game
//! - Check, checkmate, stalemate and draw classification ([`rules`])
//! - [`Game`] - a session that owns the current state and applies draws
//! - [`RulesConfig`] - which history-based draws are enforced
//!
//! # Architecture
//!
//! Every transition takes a [`GameState`] by reference and returns a new one,
//! so earlier snapshots remain valid. Rejected moves return a [`MoveError`]
//! and leave the input alone.
//!
//! # Example
//!
//! ```
//! use chess_rules::{execute_move, GameState, GameStatus};
//! use chess_board::Square;
//!
//! let sq = |s| Square::from_algebraic(s).unwrap();
//! let mut state = GameState::new();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     state = execute_move(&state, sq(from), sq(to), None).unwrap();
//! }
//! assert_eq!(state.status, GameStatus::Checkmate);
//! ```

mod config;
mod error;
mod executor;
mod game;
pub mod movegen;
pub mod rules;
mod state;

pub use config::{ConfigError, RulesConfig};
pub use error::MoveError;
pub use executor::{cancel_promotion, execute_move, select_square};
pub use game::Game;
pub use movegen::attacks::{
    filter_legal_moves, find_king, is_king_in_check, is_square_attacked,
    would_move_result_in_check,
};
pub use movegen::special::CastleSide;
pub use movegen::{generate_moves, has_legal_moves, is_valid_move, legal_moves};
pub use rules::{
    adjudicate_draws, determine_status, is_fifty_move_rule, is_insufficient_material,
    is_threefold_repetition, DrawReason, GameResult, GameStatus,
};
pub use state::{CapturedPieces, CheckInfo, GameState, PendingPromotion};
