//! Terminal rendering and feedback for the block game.
//!
//! This is a small, game-oriented rendering layer. It does not use a widget
//! toolkit; it renders into a plain framebuffer that is flushed to the
//! terminal with only the changed cells re-sent.
//!
//! - [`game_view`]: pure mapping from `GameState` to a [`FrameBuffer`]
//! - [`renderer`]: raw-mode terminal session, frame diffing and the bell
//! - [`feedback`]: a `FeedbackSink` that turns game events into flash labels and bells

pub mod fb;
pub mod feedback;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use feedback::{TerminalFeedback, FLASH_MS};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
