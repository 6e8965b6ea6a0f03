//! Game session management.
//!
//! The [`Game`] struct owns the current [`GameState`] and drives it through
//! the pure transitions in this crate:
//! - Refuses moves once the game is over
//! - Applies the enabled history-based draws after every move
//! - Tracks selection for click-driven front ends

use crate::executor::{cancel_promotion, execute_move, select_square};
use crate::movegen::generate_moves;
use crate::rules::{adjudicate_draws, GameResult};
use crate::{GameState, MoveError, RulesConfig};
use chess_board::{PieceKind, Square};

/// A chess game in progress.
///
/// Unlike [`GameState`], which is a single snapshot, `Game` holds the
/// current snapshot and replaces it on every accepted move.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    config: RulesConfig,
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given rules configuration.
    pub fn with_config(config: RulesConfig) -> Self {
        Game {
            state: GameState::new(),
            config,
        }
    }

    /// Resumes a game from an existing state.
    pub fn from_state(state: GameState, config: RulesConfig) -> Self {
        Game { state, config }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns the legal destinations of the piece on `square`.
    ///
    /// Empty if the square is empty, holds a piece of the side not to move,
    /// or the game is over.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.state.board.piece_at(square) {
            Some(piece) if piece.color == self.state.current_turn => {
                generate_moves(&self.state.board, piece, self.state.last_move())
            }
            _ => Vec::new(),
        }
    }

    /// Plays a move.
    ///
    /// A pawn reaching its last rank without `promotion` leaves the game
    /// awaiting the choice; call `play` again with the same squares.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver(self.state.status));
        }

        let next = execute_move(&self.state, from, to, promotion)?;
        self.state = self.adjudicate(next);
        Ok(())
    }

    /// Handles a click on `square`. See [`select_square`].
    pub fn select(&mut self, square: Square) {
        let next = select_square(&self.state, square);
        if next.move_history.len() != self.state.move_history.len() {
            self.state = self.adjudicate(next);
        } else {
            self.state = next;
        }
    }

    /// Abandons a pending promotion.
    pub fn cancel_promotion(&mut self) {
        self.state = cancel_promotion(&self.state);
    }

    /// Starts a new game, keeping the configuration.
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    fn adjudicate(&self, state: GameState) -> GameState {
        adjudicate_draws(state, &self.config)
    }
}
