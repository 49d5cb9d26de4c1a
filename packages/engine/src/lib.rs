//! Puzzle Pair Engine - two draggable squares that never overlap, in WASM
//!
//! Architecture:
//! - core/          - Vector math, console logging
//! - domain/        - Pieces and board configuration
//! - systems/       - Clamp/overlap evaluator and the movement transaction
//! - simulation/    - Position store, stats, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::log_info("🧩 Puzzle pair engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default board configuration as JSON (for the page to tweak and pass back)
#[wasm_bindgen]
pub fn default_config_json() -> String {
    domain::config::BoardConfig::default().to_json()
}

// Re-export main types
pub use crate::core::vec2::Vec2;
pub use domain::config::BoardConfig;
pub use domain::piece::{DragState, Piece, PieceId};
pub use simulation::{Board, BoardCore, MoveStats, Position};
pub use systems::movement::MoveOutcome;

// Export piece ids for JS
#[wasm_bindgen]
pub fn piece_left() -> u32 { PieceId::Left as u32 }
#[wasm_bindgen]
pub fn piece_right() -> u32 { PieceId::Right as u32 }
