//! Complete game state, replaced wholesale by every transition.

use crate::movegen::attacks::{find_king, is_king_in_check};
use crate::rules::{determine_status, DrawReason, GameResult, GameStatus};
use chess_board::{Board, Color, Move, Piece, Square};
use serde::{Deserialize, Serialize};

/// Pieces removed from the board, grouped by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    /// Returns the pieces of `color` that have been captured.
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Total number of captured pieces of both colors.
    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Sum of the values of the pieces of `color` that have been captured.
    pub fn material(&self, color: Color) -> u32 {
        self.of(color).iter().map(|p| p.kind.value()).sum()
    }
}

/// Check information for the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInfo {
    pub in_check: bool,
    /// Square of the checked king, present only while in check.
    pub king_position: Option<Square>,
}

impl CheckInfo {
    pub(crate) fn of(board: &Board, color: Color) -> Self {
        let in_check = is_king_in_check(board, color);
        CheckInfo {
            in_check,
            king_position: if in_check { find_king(board, color) } else { None },
        }
    }
}

/// A pawn advance onto its last rank waiting for the promotion kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub pawn: Piece,
}

/// Snapshot of a game.
///
/// Transitions never mutate a state in place; each returns a new value, so
/// any earlier snapshot stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Board the history starts from, used to replay positions.
    pub starting_board: Board,
    pub current_turn: Color,
    pub move_history: Vec<Move>,
    pub captured_pieces: CapturedPieces,
    pub status: GameStatus,
    /// Set whenever `status` is stalemate or draw.
    pub draw_reason: Option<DrawReason>,
    pub check: CheckInfo,
    pub selected_piece: Option<Piece>,
    pub valid_moves: Vec<Square>,
    pub pending_promotion: Option<PendingPromotion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates the standard starting state with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Creates a state from an arbitrary board with an empty history.
    ///
    /// The status is computed immediately, so a board that is already mate
    /// or stalemate starts out terminal.
    pub fn from_board(board: Board, current_turn: Color) -> Self {
        let status = determine_status(&board, current_turn, None);
        GameState {
            starting_board: board.clone(),
            check: CheckInfo::of(&board, current_turn),
            board,
            current_turn,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            status,
            draw_reason: draw_reason_for(status),
            selected_piece: None,
            valid_moves: Vec::new(),
            pending_promotion: None,
        }
    }

    /// Returns the most recent move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the outcome, or `None` while play continues.
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Checkmate => Some(GameResult::win_for(self.current_turn.opposite())),
            GameStatus::Stalemate => Some(GameResult::Draw(DrawReason::Stalemate)),
            GameStatus::Draw => Some(GameResult::Draw(
                self.draw_reason.unwrap_or(DrawReason::InsufficientMaterial),
            )),
            GameStatus::Active | GameStatus::Check => None,
        }
    }

    /// Material `color` has taken minus material it has lost.
    pub fn material_advantage(&self, color: Color) -> i32 {
        let taken = self.captured_pieces.material(color.opposite()) as i32;
        let lost = self.captured_pieces.material(color) as i32;
        taken - lost
    }
}

/// The draw reason implied by a status computed from the board alone.
pub(crate) fn draw_reason_for(status: GameStatus) -> Option<DrawReason> {
    match status {
        GameStatus::Stalemate => Some(DrawReason::Stalemate),
        GameStatus::Draw => Some(DrawReason::InsufficientMaterial),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_board::PieceKind;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_state() {
        let state = GameState::new();
        assert_eq!(state.current_turn, Color::White);
        assert_eq!(state.status, GameStatus::Active);
        assert!(state.move_history.is_empty());
        assert!(state.captured_pieces.is_empty());
        assert!(!state.check.in_check);
        assert_eq!(state.check.king_position, None);
        assert_eq!(state.draw_reason, None);
        assert_eq!(state.result(), None);
        assert_eq!(state.board, state.starting_board);
    }

    #[test]
    fn from_board_detects_mate() {
        let board =
            Board::from_placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR").unwrap();
        let state = GameState::from_board(board, Color::White);
        assert_eq!(state.status, GameStatus::Checkmate);
        assert!(state.check.in_check);
        assert_eq!(state.check.king_position, Some(sq("e1")));
        assert_eq!(state.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn from_board_detects_stalemate() {
        let board = Board::from_placement("7k/5K2/6Q1/8/8/8/8/8").unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert_eq!(state.status, GameStatus::Stalemate);
        assert_eq!(state.draw_reason, Some(DrawReason::Stalemate));
        assert_eq!(state.result(), Some(GameResult::Draw(DrawReason::Stalemate)));
    }

    #[test]
    fn captured_pieces_keyed_by_victim_color() {
        let mut captured = CapturedPieces::default();
        captured.push(Piece::new(PieceKind::Queen, Color::Black, sq("d8")));
        captured.push(Piece::new(PieceKind::Pawn, Color::White, sq("e2")));
        captured.push(Piece::new(PieceKind::Knight, Color::Black, sq("b8")));

        assert_eq!(captured.len(), 3);
        assert_eq!(captured.of(Color::Black).len(), 2);
        assert_eq!(captured.material(Color::Black), 12);
        assert_eq!(captured.material(Color::White), 1);
    }

    #[test]
    fn material_advantage_is_symmetric() {
        let mut state = GameState::new();
        state
            .captured_pieces
            .push(Piece::new(PieceKind::Rook, Color::Black, sq("a8")));
        state
            .captured_pieces
            .push(Piece::new(PieceKind::Bishop, Color::White, sq("c1")));
        assert_eq!(state.material_advantage(Color::White), 2);
        assert_eq!(state.material_advantage(Color::Black), -2);
    }
}
