//! Toroidal Snake - a terminal Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic: grid, snake, food and the per-tick engine (game module)
//! - Terminal rendering behind the `Renderer` trait (render module)
//! - Keyboard input behind the `InputSource` trait (input module)
//! - Session counters (metrics module)
//! - The fixed-rate game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
