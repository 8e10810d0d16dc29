//! Text presentation surface.
//!
//! Screens are written to any `AsyncWrite` and choices are read line by line
//! from any `AsyncBufRead`. The binary wires stdout and stdin.

mod presenter;
mod render;

pub use presenter::TerminalPresenter;
pub use render::render_screen;
