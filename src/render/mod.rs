pub mod renderer;
pub mod terminal;

pub use renderer::{draw_scene, Palette, Renderer, Status};
pub use terminal::{TerminalGuard, TerminalRenderer};
