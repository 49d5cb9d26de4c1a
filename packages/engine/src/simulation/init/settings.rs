use super::move_stats::MoveStats;
use super::BoardCore;

pub(super) fn set_debug_logging(board: &mut BoardCore, enabled: bool) {
    board.debug_logging = enabled;
}

pub(super) fn get_stats(board: &BoardCore) -> MoveStats {
    board.stats.clone()
}
