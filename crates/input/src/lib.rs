//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`types::GameAction`]s. The mapping is
//! the driver's business; the game core only ever sees actions. Keys that map
//! to nothing are simply ignored.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, is_mute_toggle, should_quit};
