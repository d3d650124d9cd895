//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events onto the engine's abstract
//! [`InputEvent`](crate::types::InputEvent)s. The engine never sees which
//! device an event came from.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{map_event, map_key, map_mouse, mouse_point, should_quit};
