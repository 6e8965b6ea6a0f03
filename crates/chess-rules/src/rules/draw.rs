//! Draws that depend on the game history rather than the current board.

use super::{DrawReason, GameStatus};
use crate::movegen::special::CastleSide;
use crate::{GameState, RulesConfig};
use chess_board::{Board, Move};
use std::collections::HashMap;
use tracing::info;

/// Half-moves without a pawn move or capture that draw the game.
pub const FIFTY_MOVE_PLIES: usize = 100;

/// Returns true if the last 100 half-moves contain no pawn move and no capture.
///
/// A promotion counts as a pawn move.
pub fn is_fifty_move_rule(state: &GameState) -> bool {
    let history = &state.move_history;
    if history.len() < FIFTY_MOVE_PLIES {
        return false;
    }

    history[history.len() - FIFTY_MOVE_PLIES..]
        .iter()
        .all(|m| !m.is_pawn_move() && !m.is_capture())
}

/// Returns true if any piece placement has occurred three times.
///
/// Positions are rebuilt by replaying the history from the starting board,
/// including castling rooks, en passant removals and promotions. Only the
/// placement is compared; side to move and castling rights are not.
pub fn is_threefold_repetition(state: &GameState) -> bool {
    let mut board = state.starting_board.clone();
    let mut seen: HashMap<String, usize> = HashMap::new();
    seen.insert(board.placement(), 1);

    for record in &state.move_history {
        replay(&mut board, record);
        let count = seen.entry(board.placement()).or_insert(0);
        *count += 1;
        if *count >= 3 {
            return true;
        }
    }

    false
}

/// Downgrades an active game to a draw when an enabled history rule holds.
///
/// `Check` and terminal statuses are returned unchanged.
pub fn adjudicate_draws(state: GameState, config: &RulesConfig) -> GameState {
    if state.status != GameStatus::Active {
        return state;
    }

    let reason = if config.fifty_move_rule && is_fifty_move_rule(&state) {
        DrawReason::FiftyMoveRule
    } else if config.threefold_repetition && is_threefold_repetition(&state) {
        DrawReason::ThreefoldRepetition
    } else {
        return state;
    };

    info!(?reason, plies = state.move_history.len(), "draw adjudicated");
    GameState {
        status: GameStatus::Draw,
        draw_reason: Some(reason),
        ..state
    }
}

fn replay(board: &mut Board, record: &Move) {
    if record.is_castle {
        if let Some(rook) =
            CastleSide::of_king_move(record.from, record.to).and_then(|side| side.rook_move(record.from))
        {
            board.move_piece(rook.from, rook.to);
        }
    }

    if record.is_en_passant {
        if let Some(captured) = record.captured {
            board.remove(captured.position);
        }
    }

    board.move_piece(record.from, record.to);
    if record.is_promotion() {
        board.put(record.piece);
    }
}
