//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the engine draws into a
//! framebuffer of styled characters through the [`Renderer`](crate::engine::Renderer)
//! seam, and the framebuffer is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - One surface unit per character; grid cells are 2 wide by 1 tall to
//!   compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
