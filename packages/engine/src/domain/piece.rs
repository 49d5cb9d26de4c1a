use crate::core::vec2::Vec2;

/// Which of the two squares. Numeric values are the ids JS passes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceId {
    Left = 0,
    Right = 1,
}

impl PieceId {
    pub const ALL: [PieceId; 2] = [PieceId::Left, PieceId::Right];

    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(PieceId::Left),
            1 => Some(PieceId::Right),
            _ => None,
        }
    }

    /// Ids from JS arrive as full numbers; anything outside 0..=1 is unknown
    pub fn from_u32(id: u32) -> Option<Self> {
        u8::try_from(id).ok().and_then(Self::from_u8)
    }

    /// The piece used as the static obstacle when this one moves
    pub fn other(self) -> Self {
        match self {
            PieceId::Left => PieceId::Right,
            PieceId::Right => PieceId::Left,
        }
    }

    /// Stacking order on the page: left is drawn on top
    pub fn z_index(self) -> u8 {
        match self {
            PieceId::Left => 2,
            PieceId::Right => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PieceId::Left => "left",
            PieceId::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    BeingDragged,
}

/// A movable square
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    /// Position as rendered
    pub current: Vec2,
    /// Most recent position that passed clamp and overlap checks
    pub last_valid: Vec2,
    pub drag: DragState,
}

impl Piece {
    pub fn new(start: Vec2) -> Self {
        Self {
            current: start,
            last_valid: start,
            drag: DragState::Idle,
        }
    }

    pub fn commit(&mut self, pos: Vec2) {
        self.current = pos;
        self.last_valid = pos;
    }

    pub fn revert(&mut self) {
        self.current = self.last_valid;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::BeingDragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_round_trip_through_u8() {
        for id in PieceId::ALL {
            assert_eq!(PieceId::from_u8(id as u8), Some(id));
        }
        assert_eq!(PieceId::from_u8(2), None);
        assert_eq!(PieceId::from_u8(255), None);
    }

    #[test]
    fn wide_ids_do_not_wrap_onto_pieces() {
        assert_eq!(PieceId::from_u32(1), Some(PieceId::Right));
        assert_eq!(PieceId::from_u32(256), None);
        assert_eq!(PieceId::from_u32(257), None);
        assert_eq!(PieceId::from_u32(u32::MAX), None);
    }

    #[test]
    fn other_is_symmetric() {
        assert_eq!(PieceId::Left.other(), PieceId::Right);
        assert_eq!(PieceId::Right.other().other(), PieceId::Right);
    }

    #[test]
    fn revert_restores_last_valid() {
        let mut piece = Piece::new(Vec2::new(50.0, 225.0));
        piece.current = Vec2::new(70.0, 225.0);
        piece.revert();
        assert_eq!(piece.current, Vec2::new(50.0, 225.0));

        piece.commit(Vec2::new(60.0, 200.0));
        assert_eq!(piece.current, piece.last_valid);
    }
}
