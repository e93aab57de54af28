//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the game core, the input mapper and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (4, 0), the top-left corner of a piece's shape grid
//!
//! # Drop Cadence
//!
//! The automatic drop interval decays geometrically with the level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 640ms |
//! | 4 | 512ms |
//! | n | `1000 * 0.8^(n-1)` |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.letter(), 'T');
//! assert_eq!(GameAction::HardDrop.as_str(), "HARD_DROP");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the spawn anchor: `floor(BOARD_WIDTH / 2) - 1`
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Row of the spawn anchor
pub const SPAWN_Y: i8 = 0;

/// Points per cleared line, multiplied by the level at the time of the clear
pub const POINTS_PER_LINE: u32 = 100;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Drop interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Multiplier applied to the drop interval for every level above 1
pub const DROP_DECAY: f64 = 0.8;

/// Shortest drop interval the cadence will produce
pub const DROP_INTERVAL_MIN_MS: u32 = 1;

/// Frame / input poll period of the interactive loop (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Side length of the next-piece preview canvas, in cells
pub const PREVIEW_SIZE: u8 = 4;

/// The seven tetromino piece kinds
///
/// - **I**: cyan bar
/// - **O**: yellow square
/// - **T**: purple T
/// - **S**: green S
/// - **Z**: red Z (mirror of S)
/// - **J**: blue J
/// - **L**: orange L (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse a piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter naming the piece
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Discrete actions accepted by the game reducer
///
/// Both the keyboard and the drop timer feed these into the same dispatch
/// point, so the reducer never sees two transitions at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Rotate the piece 90° clockwise in place
    Rotate,
    /// Advance the piece one row, landing it if it cannot move
    MoveDown,
    /// Drop the piece to its lowest legal row and land it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a fresh game
    Reset,
}

impl GameAction {
    /// Every action
    pub const ALL: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::MoveDown,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Reset,
    ];

    /// Parse an action name such as `"MOVE_LEFT"`, `"moveLeft"` or `"hard-drop"`
    ///
    /// Unrecognized names yield `None`, which callers treat as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_name("MOVE_LEFT"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_name("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_name("jump"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "movedown" => Some(GameAction::MoveDown),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Canonical upper snake case name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "MOVE_LEFT",
            GameAction::MoveRight => "MOVE_RIGHT",
            GameAction::Rotate => "ROTATE",
            GameAction::MoveDown => "MOVE_DOWN",
            GameAction::HardDrop => "HARD_DROP",
            GameAction::Pause => "PAUSE",
            GameAction::Reset => "RESET",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: occupied by a landed piece of that kind
pub type Cell = Option<PieceKind>;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
