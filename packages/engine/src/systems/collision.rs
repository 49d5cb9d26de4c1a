use crate::core::vec2::Vec2;
use crate::domain::config::BoardConfig;

/// Clamp a top-left position so a `piece_size` square stays on the board.
/// Each axis is clamped independently into `[0, dimension - size]`.
#[inline]
pub fn clamp(pos: Vec2, board: &BoardConfig) -> Vec2 {
    Vec2 {
        x: pos.x.min(board.max_x()).max(0.0),
        y: pos.y.min(board.max_y()).max(0.0),
    }
}

/// Axis-aligned overlap test for two squares of side `size`.
/// Strict comparisons: squares sharing an edge do not overlap.
#[inline]
pub fn overlaps(a: Vec2, b: Vec2, size: f32) -> bool {
    a.x < b.x + size && a.x + size > b.x && a.y < b.y + size && a.y + size > b.y
}
