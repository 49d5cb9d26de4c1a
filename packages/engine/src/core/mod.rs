//! Core building blocks shared by every layer

pub mod log;
pub mod vec2;
