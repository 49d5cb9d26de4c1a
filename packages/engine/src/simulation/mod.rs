//! BoardCore - position store for the two puzzle pieces
//!
//! The core owns both piece records and is mutated only through movement
//! events (plus drag bookkeeping and reset). Everything runs to completion on
//! the caller's thread; cross-piece reads are plain copies of the other
//! piece's committed position.
//!
//! Rules live in systems/ (clamp, overlap, movement transaction).
//! facade.rs exposes the core to JS.

use crate::core::vec2::Vec2;
use crate::domain::config::BoardConfig;
use crate::domain::piece::{DragState, Piece, PieceId};
use crate::systems::movement::MoveOutcome;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/move_stats.rs"]
mod move_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{Board, Position};
pub use move_stats::MoveStats;
pub use render_extract::{BoardSnapshot, PieceSnapshot};

use perf_timer::PerfTimer;

/// The two pieces and the board they live on
pub struct BoardCore {
    config: BoardConfig,
    pieces: [Piece; 2],

    // Diagnostics
    stats: MoveStats,
    debug_logging: bool,
    last_outcome: Option<MoveOutcome>,
}

impl BoardCore {
    /// Create a board with the default 800x600 layout
    pub fn new() -> Self {
        init::create_board_core(BoardConfig::default())
    }

    /// Create a board from an already validated config
    pub fn with_config(config: BoardConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_board_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = BoardConfig::from_json(json)?;
        Ok(init::create_board_core(config))
    }

    pub fn config(&self) -> &BoardConfig { &self.config }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id as usize]
    }

    /// Committed position of a piece (what the renderer should draw)
    pub fn position(&self, id: PieceId) -> Vec2 {
        self.piece(id).current
    }

    pub fn last_valid(&self, id: PieceId) -> Vec2 {
        self.piece(id).last_valid
    }

    pub fn drag_state(&self, id: PieceId) -> DragState {
        self.piece(id).drag
    }

    pub fn last_outcome(&self) -> Option<MoveOutcome> { self.last_outcome }

    /// Apply one movement event. Returns the moving piece's committed position.
    pub fn on_move(&mut self, id: PieceId, delta: Vec2) -> Vec2 {
        commands::on_move(self, id, delta).position()
    }

    /// Same as `on_move`, but reports whether the move was committed or reverted
    pub fn apply_move(&mut self, id: PieceId, delta: Vec2) -> MoveOutcome {
        commands::on_move(self, id, delta)
    }

    /// Pointer-down on a piece
    pub fn begin_drag(&mut self, id: PieceId) {
        commands::begin_drag(self, id)
    }

    /// Pointer-up / cancel on a piece
    pub fn end_drag(&mut self, id: PieceId) {
        commands::end_drag(self, id)
    }

    /// Put both pieces back at their starting positions and clear stats
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    pub fn set_debug_logging(&mut self, enabled: bool) {
        settings::set_debug_logging(self, enabled);
    }

    pub fn stats(&self) -> MoveStats {
        settings::get_stats(self)
    }

    /// Serializable view of both pieces for the presentation layer
    pub fn snapshot(&self) -> BoardSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

impl Default for BoardCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
