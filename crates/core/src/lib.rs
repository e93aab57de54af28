//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state transitions. It has no
//! dependencies on terminals, input devices or audio, which makes it:
//!
//! - **Deterministic**: the same piece source and action sequence always give the same game
//! - **Immutable per step**: every transition returns a new [`GameState`]
//! - **Testable**: every rule can be exercised with a scripted [`PieceSequence`]
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes, their colors, and clockwise rotation
//! - [`board`]: 10x20 grid with collision detection, merging and line clearing
//! - [`game_state`]: the game aggregate and its reducer
//! - [`scoring`]: points per clear, level from score, drop cadence
//! - [`rng`]: uniform random and scripted piece sources
//! - [`events`]: feedback events and the sink trait observers implement
//! - [`timer`]: level-dependent auto-drop timer
//! - [`session`]: serialized dispatch point tying state, pieces and timer together
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random, repeats allowed
//! - Rotation is clockwise in place, with no wall kicks
//! - A piece that cannot move down lands: it is merged, full rows are cleared,
//!   `lines * 100 * level` points are added and the level becomes `score / 1000 + 1`
//! - The game ends when either the promoted piece or the newly drawn next piece
//!   would collide at the spawn position
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameState, PieceSequence};
//! use tui_blocks_core::types::{GameAction, PieceKind};
//!
//! let mut pieces = PieceSequence::repeat(PieceKind::O);
//! let game = GameState::new(&mut pieces);
//!
//! let step = game.reduce(GameAction::HardDrop, &mut pieces);
//! assert_eq!(step.state.board.get(4, 19), Some(Some(PieceKind::O)));
//! // The previous state is untouched.
//! assert_eq!(game.board.get(4, 19), Some(None));
//! ```

pub mod board;
pub mod events;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod timer;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use events::{EventList, FeedbackSink, GameEvent, NullFeedback, RecordingFeedback};
pub use game_state::{GameState, Transition};
pub use pieces::{piece_color, rotate, Piece, Position, Shape};
pub use rng::{PieceSequence, PieceSource, RandomPieces};
pub use scoring::{calculate_score, get_drop_interval_ms, level_for_score, DropCadence};
pub use session::Session;
pub use timer::DropTimer;
