use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::domain::piece::PieceId;
use crate::systems::collision::overlaps;

pub const DEFAULT_BOARD_WIDTH: f32 = 800.0;
pub const DEFAULT_BOARD_HEIGHT: f32 = 600.0;
pub const DEFAULT_PIECE_SIZE: f32 = 150.0;
pub const DEFAULT_LEFT_START: Vec2 = Vec2 { x: 50.0, y: 225.0 };
pub const DEFAULT_RIGHT_START: Vec2 = Vec2 { x: 600.0, y: 225.0 };

/// Fixed inputs of a board: dimensions, piece size and starting positions.
///
/// Missing JSON fields fall back to the defaults, so `{"pieceSize": 100}` is
/// a complete config.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub width: f32,
    pub height: f32,
    pub piece_size: f32,
    pub left_start: Vec2,
    pub right_start: Vec2,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            piece_size: DEFAULT_PIECE_SIZE,
            left_start: DEFAULT_LEFT_START,
            right_start: DEFAULT_RIGHT_START,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: BoardConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Largest valid x for a piece's top-left corner
    pub fn max_x(&self) -> f32 {
        self.width - self.piece_size
    }

    /// Largest valid y for a piece's top-left corner
    pub fn max_y(&self) -> f32 {
        self.height - self.piece_size
    }

    pub fn start(&self, id: PieceId) -> Vec2 {
        match id {
            PieceId::Left => self.left_start,
            PieceId::Right => self.right_start,
        }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.max_x() && pos.y >= 0.0 && pos.y <= self.max_y()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("pieceSize", self.piece_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, v));
            }
        }

        if self.piece_size > self.width || self.piece_size > self.height {
            return Err(format!(
                "piece size {} does not fit a {}x{} board",
                self.piece_size, self.width, self.height
            ));
        }

        for id in PieceId::ALL {
            let start = self.start(id);
            if !start.is_finite() || !self.in_bounds(start) {
                return Err(format!(
                    "{} start ({}, {}) is outside the board",
                    id.label(),
                    start.x,
                    start.y
                ));
            }
        }

        if overlaps(self.left_start, self.right_start, self.piece_size) {
            return Err("starting positions overlap".to_string());
        }

        Ok(())
    }
}
