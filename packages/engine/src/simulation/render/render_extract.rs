use serde::Serialize;

use crate::domain::piece::PieceId;

use super::BoardCore;

/// One piece as the page draws it: an absolutely positioned `size x size` box
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSnapshot {
    pub id: u8,
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub z_index: u8,
    pub dragging: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub width: f32,
    pub height: f32,
    pub pieces: Vec<PieceSnapshot>,
}

pub(super) fn snapshot(board: &BoardCore) -> BoardSnapshot {
    let size = board.config.piece_size;
    let pieces = PieceId::ALL
        .iter()
        .map(|&id| {
            let piece = board.piece(id);
            PieceSnapshot {
                id: id as u8,
                label: id.label(),
                x: piece.current.x,
                y: piece.current.y,
                size,
                z_index: id.z_index(),
                dragging: piece.is_dragging(),
            }
        })
        .collect();

    BoardSnapshot {
        width: board.config.width,
        height: board.config.height,
        pieces,
    }
}

pub(super) fn snapshot_json(board: &BoardCore) -> String {
    serde_json::to_string(&snapshot(board)).unwrap_or_else(|_| "{}".to_string())
}
