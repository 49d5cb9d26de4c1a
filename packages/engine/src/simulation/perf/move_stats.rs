use wasm_bindgen::prelude::*;

/// Counters over all movement events since creation/reset
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveStats {
    pub(super) moves: u32,
    pub(super) accepted: u32,
    pub(super) rejected: u32,
    pub(super) clamped: u32,
    pub(super) ignored: u32,
    pub(super) last_move_ms: f64,
}

impl MoveStats {
    pub(crate) fn reset(&mut self) {
        *self = MoveStats::default();
    }
}

#[wasm_bindgen]
impl MoveStats {
    /// Movement events applied to a known piece
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn accepted(&self) -> u32 { self.accepted }
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> u32 { self.rejected }
    /// Accepted moves the board edge cut short
    #[wasm_bindgen(getter)]
    pub fn clamped(&self) -> u32 { self.clamped }
    /// Events for an unknown piece id
    #[wasm_bindgen(getter)]
    pub fn ignored(&self) -> u32 { self.ignored }
    #[wasm_bindgen(getter)]
    pub fn last_move_ms(&self) -> f64 { self.last_move_ms }
}
