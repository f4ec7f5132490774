//! Terminal rendering layer.
//!
//! A small framebuffer-based pipeline: `GameView` maps snapshots to styled
//! cells, `TerminalRenderer` flushes them to the terminal. The `core` and
//! `engine` modules never depend on anything here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
