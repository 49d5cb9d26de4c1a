use crate::domain::config::BoardConfig;
use crate::domain::piece::{Piece, PieceId};

use super::move_stats::MoveStats;
use super::BoardCore;

pub(super) fn create_board_core(config: BoardConfig) -> BoardCore {
    BoardCore {
        pieces: create_pieces(&config),
        config,
        stats: MoveStats::default(),
        debug_logging: false,
        last_outcome: None,
    }
}

pub(super) fn create_pieces(config: &BoardConfig) -> [Piece; 2] {
    [
        Piece::new(config.start(PieceId::Left)),
        Piece::new(config.start(PieceId::Right)),
    ]
}
