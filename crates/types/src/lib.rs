//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no required dependencies, making them usable
//! in any context (core logic, engine, terminal rendering, input mapping).
//! Enable the `serde` feature to (de)serialize [`GameConfig`] and
//! [`ShapeFamily`].
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 8 | Grid is N x N cells |
//! | `DEFAULT_OFFER_SLOTS` | 3 | Pieces offered per round |
//! | `DEFAULT_CLEAR_STEP_MS` | 20 | Per-cell delay of clear / game-over animations |
//! | `DEFAULT_LINE_BONUS` | 10 | Points per cleared row or column |
//! | `DEFAULT_QUIZ_INTERVAL` | 8 | Successful placements between quiz prompts |
//! | `DEFAULT_SCORE_STEPS` | 10 | Sub-increments of one smoothed score update |
//! | `DEFAULT_SCORE_DURATION_MS` | 200 | Duration of one smoothed score update |
//! | `DEFAULT_GAME_OVER_DELAY_MS` | 300 | Pause before the game-over fill starts |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Direction, GameConfig, ShapeFamily};
//!
//! let family = ShapeFamily::from_str("tromino_l").unwrap();
//! assert_eq!(family, ShapeFamily::TrominoL);
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! let config = GameConfig::default();
//! assert_eq!(config.grid_size, 8);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

/// Default grid dimension (8 x 8)
pub const DEFAULT_GRID_SIZE: u8 = 8;

/// Largest supported grid dimension
pub const MAX_GRID_SIZE: u8 = 16;

/// Default number of offered pieces
pub const DEFAULT_OFFER_SLOTS: u8 = 3;

/// Largest supported offering (one slot per digit key 1-9)
pub const MAX_OFFER_SLOTS: u8 = 9;

/// Per-cell delay of line-clear and game-over animations (20ms)
pub const DEFAULT_CLEAR_STEP_MS: u32 = 20;

/// Bonus awarded for every cleared row and every cleared column
pub const DEFAULT_LINE_BONUS: u32 = 10;

/// A quiz prompt is raised every this many successful placements
pub const DEFAULT_QUIZ_INTERVAL: u32 = 8;

/// Number of equal sub-increments a score update is split into
pub const DEFAULT_SCORE_STEPS: u32 = 10;

/// Total duration of one smoothed score update (200ms)
pub const DEFAULT_SCORE_DURATION_MS: u32 = 200;

/// Pause between game over and the start of the fill animation (300ms)
pub const DEFAULT_GAME_OVER_DELAY_MS: u32 = 300;

/// Fixed timestep of the terminal game loop (16ms ~ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Largest shape bounding box on either axis
pub const MAX_SHAPE_DIM: u8 = 8;


/// Polyomino families offered by the catalog
///
/// Each family groups the orientation variants of one shape; the catalog
/// draws a family first and a variant second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ShapeFamily {
    /// Single cell
    Monomino,
    /// 1x2 bar
    Domino,
    /// 1x3 bar
    TrominoI,
    /// Three-cell corner
    TrominoL,
    /// 1x4 bar
    TetrominoI,
    /// 2x2 square
    TetrominoO,
    TetrominoT,
    TetrominoS,
    TetrominoZ,
    TetrominoJ,
    TetrominoL,
    /// 1x5 bar
    PentominoI,
    /// 2x3 rectangle
    Rect2x3,
    /// 3x3 square
    Square3,
    /// Five-cell 3x3 corner
    CornerL,
}

impl ShapeFamily {
    /// Every family, in catalog order
    pub const ALL: [ShapeFamily; 15] = [
        ShapeFamily::Monomino,
        ShapeFamily::Domino,
        ShapeFamily::TrominoI,
        ShapeFamily::TrominoL,
        ShapeFamily::TetrominoI,
        ShapeFamily::TetrominoO,
        ShapeFamily::TetrominoT,
        ShapeFamily::TetrominoS,
        ShapeFamily::TetrominoZ,
        ShapeFamily::TetrominoJ,
        ShapeFamily::TetrominoL,
        ShapeFamily::PentominoI,
        ShapeFamily::Rect2x3,
        ShapeFamily::Square3,
        ShapeFamily::CornerL,
    ];

    /// Parse a family from its snake_case name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::ShapeFamily;
    ///
    /// assert_eq!(ShapeFamily::from_str("square3"), Some(ShapeFamily::Square3));
    /// assert_eq!(ShapeFamily::from_str("Domino"), Some(ShapeFamily::Domino));
    /// assert_eq!(ShapeFamily::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == lower)
    }

    /// Convert to snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeFamily::Monomino => "monomino",
            ShapeFamily::Domino => "domino",
            ShapeFamily::TrominoI => "tromino_i",
            ShapeFamily::TrominoL => "tromino_l",
            ShapeFamily::TetrominoI => "tetromino_i",
            ShapeFamily::TetrominoO => "tetromino_o",
            ShapeFamily::TetrominoT => "tetromino_t",
            ShapeFamily::TetrominoS => "tetromino_s",
            ShapeFamily::TetrominoZ => "tetromino_z",
            ShapeFamily::TetrominoJ => "tetromino_j",
            ShapeFamily::TetrominoL => "tetromino_l",
            ShapeFamily::PentominoI => "pentomino_i",
            ShapeFamily::Rect2x3 => "rect2x3",
            ShapeFamily::Square3 => "square3",
            ShapeFamily::CornerL => "corner_l",
        }
    }
}

/// A position on the rendering surface, in surface units
///
/// The terminal front end uses one unit per character cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair in surface units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Keyboard nudge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Cell delta as `(dx, dy)`, y growing downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Abstract input events consumed by the engine
///
/// The engine does not care whether an event came from a pointer or the
/// keyboard; front ends translate their native events into these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a surface position
    SelectAt(Point),
    /// Pointer moved while pressed
    DragTo(Point),
    /// Pointer released
    Release,
    /// Select an offering slot by index (digit keys; 0-based)
    SelectSlot(u8),
    /// Move the selected piece by one grid cell
    Nudge(Direction),
    /// Place the selected piece where it is
    Confirm,
    /// Throw the session away and start a new one
    Restart,
}

/// Recognized configuration options
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Grid dimension N
    pub grid_size: u8,
    /// Offering capacity K
    pub offer_slots: u8,
    /// Per-cell animation delay in milliseconds
    pub clear_step_ms: u32,
    /// Points per cleared row and per cleared column
    pub line_bonus: u32,
    /// Placements between quiz prompts; 0 disables the hook
    pub quiz_interval: u32,
    pub score_steps: u32,
    pub score_duration_ms: u32,
    pub game_over_delay_ms: u32,
    /// Families the catalog draws from
    pub families: Vec<ShapeFamily>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            offer_slots: DEFAULT_OFFER_SLOTS,
            clear_step_ms: DEFAULT_CLEAR_STEP_MS,
            line_bonus: DEFAULT_LINE_BONUS,
            quiz_interval: DEFAULT_QUIZ_INTERVAL,
            score_steps: DEFAULT_SCORE_STEPS,
            score_duration_ms: DEFAULT_SCORE_DURATION_MS,
            game_over_delay_ms: DEFAULT_GAME_OVER_DELAY_MS,
            families: ShapeFamily::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    /// Check every option against its supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.offer_slots == 0 || self.offer_slots > MAX_OFFER_SLOTS {
            return Err(ConfigError::OfferSlots(self.offer_slots));
        }
        if self.score_steps == 0 {
            return Err(ConfigError::ScoreSteps);
        }
        if self.families.is_empty() {
            return Err(ConfigError::NoFamilies);
        }
        Ok(())
    }
}

/// Invalid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    GridSize(u8),
    OfferSlots(u8),
    ScoreSteps,
    NoFamilies,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridSize(n) => {
                write!(f, "grid_size must be in 1..={MAX_GRID_SIZE}, got {n}")
            }
            ConfigError::OfferSlots(n) => {
                write!(f, "offer_slots must be in 1..={MAX_OFFER_SLOTS}, got {n}")
            }
            ConfigError::ScoreSteps => write!(f, "score_steps must be at least 1"),
            ConfigError::NoFamilies => write!(f, "families must name at least one shape family"),
        }
    }
}

impl std::error::Error for ConfigError {}
