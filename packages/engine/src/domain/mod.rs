pub mod config;
pub mod piece;
