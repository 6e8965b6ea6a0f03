//! Move execution: the single state transition of a game.

use crate::movegen::special::{
    execute_castling, execute_en_passant, execute_promotion, is_castling_move, is_en_passant_move,
    is_promotion_move,
};
use crate::movegen::{generate_moves, is_valid_move};
use crate::rules::{determine_status, GameStatus};
use crate::state::{draw_reason_for, CheckInfo, GameState, PendingPromotion};
use crate::MoveError;
use chess_board::{Move, PieceKind, Square};
use tracing::{debug, info};

/// Applies the move `from`→`to` to `state` and returns the resulting state.
///
/// Preconditions are checked in order: a piece stands on `from`, it belongs
/// to the side to move, and `to` is one of its legal destinations. A pawn
/// reaching its last rank without `promotion` yields a state awaiting the
/// choice: board, turn and history are unchanged and `pending_promotion`
/// is set. While a promotion is pending only the same squares are accepted.
///
/// `promotion` is ignored for moves that do not promote.
pub fn execute_move(
    state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<GameState, MoveError> {
    if let Some(pending) = state.pending_promotion {
        if pending.from != from || pending.to != to {
            debug!(%from, %to, pending_from = %pending.from, pending_to = %pending.to, "rejected: promotion pending");
            return Err(MoveError::PromotionPending {
                from: pending.from,
                to: pending.to,
            });
        }
    }

    let Some(piece) = state.board.piece_at(from).copied() else {
        debug!(%from, %to, "rejected: no piece");
        return Err(MoveError::NoPiece(from));
    };

    if piece.color != state.current_turn {
        debug!(%from, %to, color = %piece.color, "rejected: wrong turn");
        return Err(MoveError::WrongTurn {
            square: from,
            expected: state.current_turn,
            found: piece.color,
        });
    }

    let last_move = state.last_move();
    if !is_valid_move(&state.board, &piece, to, last_move) {
        debug!(%from, %to, "rejected: illegal move");
        return Err(MoveError::IllegalMove { from, to });
    }

    let promotes = is_promotion_move(&piece, to);
    let promotion = if promotes { promotion } else { None };

    if promotes {
        match promotion {
            None => {
                debug!(%from, %to, "awaiting promotion choice");
                return Ok(GameState {
                    selected_piece: None,
                    valid_moves: Vec::new(),
                    pending_promotion: Some(PendingPromotion { from, to, pawn: piece }),
                    ..state.clone()
                });
            }
            Some(kind) if !kind.is_promotion_target() => {
                debug!(%from, %to, %kind, "rejected: invalid promotion");
                return Err(MoveError::InvalidPromotion(kind));
            }
            Some(_) => {}
        }
    }

    let mut board = state.board.clone();
    let mut record = if is_castling_move(&piece, from, to) {
        execute_castling(&mut board, from, to).ok_or(MoveError::IllegalMove { from, to })?;
        Move {
            is_castle: true,
            ..Move::new(from, to, piece.moved_to(to))
        }
    } else if let Some(kind) = promotion {
        let captured = board.piece_at(to).copied();
        let promoted = execute_promotion(&mut board, &piece, to, kind)?;
        Move {
            captured,
            promotion: Some(kind),
            ..Move::new(from, to, promoted)
        }
    } else if is_en_passant_move(&board, &piece, to) {
        let captured = execute_en_passant(&mut board, &piece, to);
        Move {
            captured,
            is_en_passant: true,
            ..Move::new(from, to, piece.moved_to(to))
        }
    } else {
        let captured = board.move_piece(from, to);
        Move {
            captured,
            is_pawn_double_move: piece.kind == PieceKind::Pawn
                && from.row().abs_diff(to.row()) == 2,
            ..Move::new(from, to, piece.moved_to(to))
        }
    };

    let next_turn = state.current_turn.opposite();
    let status = determine_status(&board, next_turn, Some(&record));
    record.is_check = matches!(status, GameStatus::Check | GameStatus::Checkmate);
    record.is_checkmate = status == GameStatus::Checkmate;

    let mut captured_pieces = state.captured_pieces.clone();
    if let Some(captured) = record.captured {
        captured_pieces.push(captured);
    }

    debug!(mov = %record, %status, "move applied");
    if status.is_terminal() {
        info!(mov = %record, %status, "game over");
    }

    let mut move_history = state.move_history.clone();
    move_history.push(record);

    Ok(GameState {
        check: CheckInfo::of(&board, next_turn),
        board,
        starting_board: state.starting_board.clone(),
        current_turn: next_turn,
        move_history,
        captured_pieces,
        status,
        draw_reason: draw_reason_for(status),
        selected_piece: None,
        valid_moves: Vec::new(),
        pending_promotion: None,
    })
}

/// Abandons a pending promotion, leaving board, turn and history untouched.
pub fn cancel_promotion(state: &GameState) -> GameState {
    if let Some(pending) = state.pending_promotion {
        debug!(from = %pending.from, to = %pending.to, "promotion cancelled");
    }
    GameState {
        pending_promotion: None,
        selected_piece: None,
        valid_moves: Vec::new(),
        ..state.clone()
    }
}

/// Handles a click on `square`.
///
/// Selecting one of the mover's pieces lists its legal destinations. With a
/// piece selected, any other square is an attempt to move there: success
/// returns the new state (possibly awaiting promotion) and rejection clears
/// the selection. Anything else only clears the highlighted destinations.
/// Finished games and pending promotions are left as they are.
pub fn select_square(state: &GameState, square: Square) -> GameState {
    if state.is_game_over() || state.pending_promotion.is_some() {
        return state.clone();
    }

    if let Some(piece) = state
        .board
        .piece_at(square)
        .filter(|p| p.color == state.current_turn)
    {
        return GameState {
            selected_piece: Some(*piece),
            valid_moves: generate_moves(&state.board, piece, state.last_move()),
            ..state.clone()
        };
    }

    match state.selected_piece {
        Some(selected) => match execute_move(state, selected.position, square, None) {
            Ok(next) => next,
            Err(_) => GameState {
                selected_piece: None,
                valid_moves: Vec::new(),
                ..state.clone()
            },
        },
        None => GameState {
            valid_moves: Vec::new(),
            ..state.clone()
        },
    }
}
