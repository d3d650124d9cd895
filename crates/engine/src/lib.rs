//! Game engine: turn state machine, scheduled animation and collaborator seams
//!
//! - [`engine`]: `GameEngine`, the placement state machine
//! - [`session`]: state owned by one game
//! - [`timeline`]: scheduled steps on a virtual clock
//! - [`render`]: the `Renderer` sink
//! - [`quiz`]: the milestone hook and the bundled question deck
//!
//! # Example
//!
//! ```
//! use tui_blocks_engine::{GameEngine, Response};
//! use tui_blocks_engine::types::{GameConfig, InputEvent, Size};
//!
//! let mut engine = GameEngine::new(
//!     GameConfig::default(),
//!     42,
//!     Size::new(80.0, 24.0),
//!     Size::new(2.0, 1.0),
//! )
//! .unwrap();
//!
//! assert_eq!(engine.handle(InputEvent::SelectSlot(0)), Response::Updated);
//! // Nothing is running yet, so ticking changes nothing
//! assert!(!engine.tick(16));
//! ```

pub mod engine;
pub mod quiz;
pub mod render;
pub mod session;
pub mod timeline;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use engine::{GameEngine, Phase, PlacementReport, Response};
pub use quiz::{NoQuiz, Question, QuizDeck, QuizPrompt, QuizService};
pub use render::{Renderer, StatusView};
pub use session::GameSession;
pub use timeline::{ScheduledStep, Step, Timeline};
