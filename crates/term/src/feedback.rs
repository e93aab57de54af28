//! Terminal stand-in for sound effects.
//!
//! Every game event shows a short label in the side panel. The notable ones
//! (line clear, level up, game over) also ask for a terminal bell. Muting
//! silences the bell but keeps the labels.

use crate::core::FeedbackSink;

/// How long a flash label stays on screen.
pub const FLASH_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    label: &'static str,
    rank: u8,
    remaining_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TerminalFeedback {
    muted: bool,
    bell: bool,
    flash: Option<Flash>,
}

impl TerminalFeedback {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            ..Self::default()
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the muted flag and return the new value.
    ///
    /// Muting also drops a bell that was requested but not yet rung.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.bell = false;
        }
        log::info!("sound {}", if self.muted { "muted" } else { "on" });
        self.muted
    }

    /// Whether a bell is due; clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// Label currently on screen, if any.
    pub fn flash(&self) -> Option<&'static str> {
        self.flash.map(|f| f.label)
    }

    /// Age the current label by `elapsed_ms`.
    pub fn decay(&mut self, elapsed_ms: u32) {
        if let Some(flash) = &mut self.flash {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
            if flash.remaining_ms == 0 {
                self.flash = None;
            }
        }
    }

    // A live label is only replaced by one of equal or higher rank.
    fn show(&mut self, label: &'static str, rank: u8) {
        if self.flash.is_some_and(|f| f.rank > rank) {
            return;
        }
        self.flash = Some(Flash {
            label,
            rank,
            remaining_ms: FLASH_MS,
        });
    }

    fn ring(&mut self) {
        if !self.muted {
            self.bell = true;
        }
    }
}

impl FeedbackSink for TerminalFeedback {
    fn piece_moved(&mut self) {
        self.show("move", 0);
    }

    fn piece_rotated(&mut self) {
        self.show("rotate", 0);
    }

    fn hard_drop(&mut self) {
        self.show("drop!", 1);
    }

    fn piece_landed(&mut self) {
        self.show("thud", 1);
    }

    fn pause_toggled(&mut self, paused: bool) {
        self.show(if paused { "paused" } else { "resumed" }, 2);
    }

    fn reset(&mut self) {
        self.show("new game", 2);
    }

    fn lines_cleared(&mut self, count: u32) {
        let label = match count {
            1 => "LINE CLEAR",
            2 => "DOUBLE",
            3 => "TRIPLE",
            _ => "TETRIS!",
        };
        self.show(label, 3);
        self.ring();
    }

    fn level_up(&mut self, _level: u32) {
        self.show("LEVEL UP", 4);
        self.ring();
    }

    fn game_over(&mut self, _score: u32) {
        self.show("GAME OVER", 5);
        self.ring();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_clear_rings_bell_once() {
        let mut fb = TerminalFeedback::new(false);
        fb.lines_cleared(1);
        assert_eq!(fb.flash(), Some("LINE CLEAR"));
        assert!(fb.take_bell());
        assert!(!fb.take_bell());
    }

    #[test]
    fn muted_keeps_labels_but_no_bell() {
        let mut fb = TerminalFeedback::new(true);
        fb.game_over(300);
        assert_eq!(fb.flash(), Some("GAME OVER"));
        assert!(!fb.take_bell());
    }

    #[test]
    fn toggle_mute_drops_pending_bell() {
        let mut fb = TerminalFeedback::new(false);
        fb.level_up(2);
        assert!(fb.toggle_mute());
        assert!(!fb.take_bell());
        assert!(!fb.toggle_mute());
    }

    #[test]
    fn minor_events_do_not_hide_major_ones() {
        let mut fb = TerminalFeedback::new(false);
        fb.lines_cleared(4);
        fb.piece_moved();
        assert_eq!(fb.flash(), Some("TETRIS!"));
        fb.level_up(3);
        assert_eq!(fb.flash(), Some("LEVEL UP"));
    }

    #[test]
    fn flash_expires() {
        let mut fb = TerminalFeedback::new(false);
        fb.piece_rotated();
        fb.decay(FLASH_MS - 1);
        assert_eq!(fb.flash(), Some("rotate"));
        fb.decay(1);
        assert_eq!(fb.flash(), None);
        fb.piece_moved();
        assert_eq!(fb.flash(), Some("move"));
    }
}
