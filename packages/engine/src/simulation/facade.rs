use wasm_bindgen::prelude::*;

use crate::core::vec2::Vec2;
use crate::domain::piece::PieceId;

use super::move_stats::MoveStats;
use super::{commands, BoardCore};

/// Committed position handed back to JS after a movement event
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    x: f32,
    y: f32,
}

#[wasm_bindgen]
impl Position {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Position { x: v.x, y: v.y }
    }
}

#[wasm_bindgen]
pub struct Board {
    core: BoardCore,
}

#[wasm_bindgen]
impl Board {
    /// Create the default 800x600 board with pieces at (50,225) and (600,225)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: BoardCore::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Board, JsValue> {
        let core = BoardCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn board_width(&self) -> f32 { self.core.config().width }

    #[wasm_bindgen(getter)]
    pub fn board_height(&self) -> f32 { self.core.config().height }

    #[wasm_bindgen(getter)]
    pub fn piece_size(&self) -> f32 { self.core.config().piece_size }

    #[wasm_bindgen(getter)]
    pub fn left_x(&self) -> f32 { self.core.position(PieceId::Left).x }

    #[wasm_bindgen(getter)]
    pub fn left_y(&self) -> f32 { self.core.position(PieceId::Left).y }

    #[wasm_bindgen(getter)]
    pub fn right_x(&self) -> f32 { self.core.position(PieceId::Right).x }

    #[wasm_bindgen(getter)]
    pub fn right_y(&self) -> f32 { self.core.position(PieceId::Right).y }

    /// Movement event consumer: apply drag delta (dx, dy) to a piece.
    /// Returns the piece's committed position, or undefined for an unknown id.
    #[wasm_bindgen(js_name = onMove)]
    pub fn on_move(&mut self, piece: u32, dx: f32, dy: f32) -> Option<Position> {
        let Some(id) = PieceId::from_u32(piece) else {
            commands::record_ignored(&mut self.core, piece);
            return None;
        };
        Some(self.core.on_move(id, Vec2::new(dx, dy)).into())
    }

    /// Current committed position of a piece
    pub fn position(&self, piece: u32) -> Option<Position> {
        PieceId::from_u32(piece).map(|id| self.core.position(id).into())
    }

    /// Pointer-down. Returns false for an unknown id.
    pub fn begin_drag(&mut self, piece: u32) -> bool {
        match PieceId::from_u32(piece) {
            Some(id) => {
                self.core.begin_drag(id);
                true
            }
            None => false,
        }
    }

    /// Pointer-up. Returns false for an unknown id.
    pub fn end_drag(&mut self, piece: u32) -> bool {
        match PieceId::from_u32(piece) {
            Some(id) => {
                self.core.end_drag(id);
                true
            }
            None => false,
        }
    }

    pub fn is_dragging(&self, piece: u32) -> bool {
        PieceId::from_u32(piece)
            .map(|id| self.core.piece(id).is_dragging())
            .unwrap_or(false)
    }

    /// Restore starting positions and clear stats
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Log reverted moves to the console
    pub fn set_debug_logging(&mut self, enabled: bool) {
        self.core.set_debug_logging(enabled);
    }

    pub fn get_stats(&self) -> MoveStats {
        self.core.stats()
    }

    /// Both pieces (position, size, z-order, drag state) as JSON
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn core(&self) -> &BoardCore {
        &self.core
    }
}
