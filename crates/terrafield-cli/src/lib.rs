//! Terrafield CLI library.
//!
//! The binary in `main.rs` dispatches to [`commands`]; the supporting
//! modules handle config loading, seed resolution, and PNG rendering.

pub mod commands;
pub mod font;
pub mod input;
pub mod render;
pub mod seed;
