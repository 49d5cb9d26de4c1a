use crate::core::log;
use crate::core::vec2::Vec2;
use crate::domain::piece::{DragState, PieceId};
use crate::systems::movement::{apply_move, MoveOutcome};

use super::{BoardCore, PerfTimer};

pub(super) fn on_move(board: &mut BoardCore, id: PieceId, delta: Vec2) -> MoveOutcome {
    let timer = PerfTimer::start();

    // Read-only copy of the other piece's committed position
    let obstacle = board.pieces[id.other() as usize].current;
    let config = board.config;
    let outcome = apply_move(&mut board.pieces[id as usize], obstacle, delta, &config);

    let stats = &mut board.stats;
    stats.moves += 1;
    match outcome {
        MoveOutcome::Committed { clamped, .. } => {
            stats.accepted += 1;
            if clamped {
                stats.clamped += 1;
            }
        }
        MoveOutcome::Reverted { position } => {
            stats.rejected += 1;
            if board.debug_logging {
                log::log_warn(&format!(
                    "{} piece move ({}, {}) would overlap; reverted to ({}, {})",
                    id.label(),
                    delta.x,
                    delta.y,
                    position.x,
                    position.y
                ));
            }
        }
    }
    stats.last_move_ms = timer.elapsed_ms();

    board.last_outcome = Some(outcome);
    outcome
}

/// Count an event for a piece id the board doesn't know
pub(super) fn record_ignored(board: &mut BoardCore, raw_id: u32) {
    board.stats.ignored += 1;
    if board.debug_logging {
        log::log_warn(&format!("ignoring move for unknown piece id {}", raw_id));
    }
}

pub(super) fn begin_drag(board: &mut BoardCore, id: PieceId) {
    board.pieces[id as usize].drag = DragState::BeingDragged;
}

pub(super) fn end_drag(board: &mut BoardCore, id: PieceId) {
    board.pieces[id as usize].drag = DragState::Idle;
}

pub(super) fn reset(board: &mut BoardCore) {
    let fresh = super::init::create_pieces(&board.config);
    board.pieces = fresh;
    board.stats.reset();
    board.last_outcome = None;
}
