//! Movement transaction
//!
//! One movement event = one delta applied to one piece, checked against the
//! other piece's committed position. The outcome is always a valid state:
//! either the clamped candidate is committed, or the piece snaps back to its
//! last valid position. There is no "slide to contact".

use crate::core::vec2::Vec2;
use crate::domain::config::BoardConfig;
use crate::domain::piece::Piece;

use super::collision::{clamp, overlaps};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Candidate accepted. `clamped` is set when the board edge cut the move short.
    Committed { position: Vec2, clamped: bool },
    /// Candidate overlapped the other piece; reverted to last valid.
    Reverted { position: Vec2 },
}

impl MoveOutcome {
    pub fn position(&self) -> Vec2 {
        match *self {
            MoveOutcome::Committed { position, .. } => position,
            MoveOutcome::Reverted { position } => position,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed { .. })
    }
}

/// Apply `delta` to `moving`, using `obstacle` as the other piece's position.
///
/// Non-finite deltas are treated as zero so NaN never reaches the store.
pub fn apply_move(moving: &mut Piece, obstacle: Vec2, delta: Vec2, board: &BoardConfig) -> MoveOutcome {
    let delta = if delta.is_finite() { delta } else { Vec2::zero() };

    let raw = moving.current + delta;
    let candidate = clamp(raw, board);

    if overlaps(candidate, obstacle, board.piece_size) {
        moving.revert();
        return MoveOutcome::Reverted { position: moving.current };
    }

    moving.commit(candidate);
    MoveOutcome::Committed {
        position: candidate,
        clamped: candidate != raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right() -> Vec2 {
        Vec2::new(600.0, 225.0)
    }

    #[test]
    fn small_move_commits() {
        let board = BoardConfig::default();
        let mut left = Piece::new(Vec2::new(50.0, 225.0));

        let out = apply_move(&mut left, right(), Vec2::new(10.0, 0.0), &board);

        assert_eq!(out, MoveOutcome::Committed { position: Vec2::new(60.0, 225.0), clamped: false });
        assert_eq!(left.current, Vec2::new(60.0, 225.0));
        assert_eq!(left.last_valid, Vec2::new(60.0, 225.0));
    }

    #[test]
    fn clamped_move_into_other_piece_reverts() {
        let board = BoardConfig::default();
        let mut left = Piece::new(Vec2::new(50.0, 225.0));

        // 50 + 760 clamps to 650, which lands inside [600, 750)
        let out = apply_move(&mut left, right(), Vec2::new(760.0, 0.0), &board);

        assert_eq!(out, MoveOutcome::Reverted { position: Vec2::new(50.0, 225.0) });
        assert_eq!(left.current, Vec2::new(50.0, 225.0));
        assert_eq!(left.last_valid, Vec2::new(50.0, 225.0));
    }

    #[test]
    fn move_past_edge_is_clamped_and_flagged() {
        let board = BoardConfig::default();
        let mut left = Piece::new(Vec2::new(50.0, 225.0));

        let out = apply_move(&mut left, right(), Vec2::new(-100.0, -500.0), &board);

        assert_eq!(out, MoveOutcome::Committed { position: Vec2::new(0.0, 0.0), clamped: true });
    }

    #[test]
    fn revert_uses_last_valid_not_current() {
        let board = BoardConfig::default();
        let mut left = Piece::new(Vec2::new(50.0, 225.0));
        // simulate a renderer-side drift of the current position
        left.current = Vec2::new(440.0, 225.0);

        let out = apply_move(&mut left, right(), Vec2::new(20.0, 0.0), &board);

        assert!(!out.is_committed());
        assert_eq!(left.current, Vec2::new(50.0, 225.0));
    }

    #[test]
    fn non_finite_delta_is_a_no_op() {
        let board = BoardConfig::default();
        let mut left = Piece::new(Vec2::new(50.0, 225.0));

        for delta in [
            Vec2::new(f32::NAN, 0.0),
            Vec2::new(0.0, f32::INFINITY),
            Vec2::new(f32::NEG_INFINITY, f32::NAN),
        ] {
            let out = apply_move(&mut left, right(), delta, &board);
            assert_eq!(out.position(), Vec2::new(50.0, 225.0));
            assert_eq!(left.last_valid, Vec2::new(50.0, 225.0));
        }
    }
}
