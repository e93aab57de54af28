//! Feedback events emitted by state transitions
//!
//! Events describe what a transition already did. Sinks observe them after the
//! new state exists; nothing they do can reach back into the reducer.

use arrayvec::ArrayVec;

/// Upper bound on events from one transition (hard drop, land, clear, level up, game over)
pub const MAX_EVENTS: usize = 8;

/// Events produced by a single transition, in the order they happened
pub type EventList = ArrayVec<GameEvent, MAX_EVENTS>;

/// Something the player should hear or see acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The piece shifted one column
    Moved,
    /// The piece rotated
    Rotated,
    /// The piece landed and was merged into the board
    Landed,
    /// Full rows were removed
    LinesCleared(u32),
    /// The level increased to the given value
    LevelUp(u32),
    /// No new piece can enter the board
    GameOver { score: u32 },
    /// The piece was dropped straight to the bottom
    HardDrop,
    /// Pause was switched on or off
    PauseToggled { paused: bool },
    /// A fresh game started
    Reset,
}

impl GameEvent {
    /// Forward this event to the matching sink method
    pub fn notify(&self, sink: &mut dyn FeedbackSink) {
        match *self {
            GameEvent::Moved => sink.piece_moved(),
            GameEvent::Rotated => sink.piece_rotated(),
            GameEvent::Landed => sink.piece_landed(),
            GameEvent::LinesCleared(lines) => sink.lines_cleared(lines),
            GameEvent::LevelUp(level) => sink.level_up(level),
            GameEvent::GameOver { score } => sink.game_over(score),
            GameEvent::HardDrop => sink.hard_drop(),
            GameEvent::PauseToggled { paused } => sink.pause_toggled(paused),
            GameEvent::Reset => sink.reset(),
        }
    }
}

/// Fire-and-forget observer of gameplay events
///
/// Every method defaults to doing nothing, so a sink only overrides what it
/// cares about. Implementations must not block.
pub trait FeedbackSink {
    fn piece_moved(&mut self) {}
    fn piece_rotated(&mut self) {}
    fn piece_landed(&mut self) {}
    fn lines_cleared(&mut self, _lines: u32) {}
    fn level_up(&mut self, _level: u32) {}
    fn game_over(&mut self, _score: u32) {}
    fn hard_drop(&mut self) {}
    fn pause_toggled(&mut self, _paused: bool) {}
    fn reset(&mut self) {}
}

/// Sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {}

/// Sink that records every event it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFeedback {
    pub events: Vec<GameEvent>,
}

impl FeedbackSink for RecordingFeedback {
    fn piece_moved(&mut self) {
        self.events.push(GameEvent::Moved);
    }

    fn piece_rotated(&mut self) {
        self.events.push(GameEvent::Rotated);
    }

    fn piece_landed(&mut self) {
        self.events.push(GameEvent::Landed);
    }

    fn lines_cleared(&mut self, lines: u32) {
        self.events.push(GameEvent::LinesCleared(lines));
    }

    fn level_up(&mut self, level: u32) {
        self.events.push(GameEvent::LevelUp(level));
    }

    fn game_over(&mut self, score: u32) {
        self.events.push(GameEvent::GameOver { score });
    }

    fn hard_drop(&mut self) {
        self.events.push(GameEvent::HardDrop);
    }

    fn pause_toggled(&mut self, paused: bool) {
        self.events.push(GameEvent::PauseToggled { paused });
    }

    fn reset(&mut self) {
        self.events.push(GameEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_reaches_matching_method() {
        let all = [
            GameEvent::Moved,
            GameEvent::Rotated,
            GameEvent::Landed,
            GameEvent::LinesCleared(2),
            GameEvent::LevelUp(3),
            GameEvent::GameOver { score: 1200 },
            GameEvent::HardDrop,
            GameEvent::PauseToggled { paused: true },
            GameEvent::Reset,
        ];
        let mut sink = RecordingFeedback::default();
        for event in &all {
            event.notify(&mut sink);
        }
        assert_eq!(sink.events, all.to_vec());
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullFeedback;
        GameEvent::GameOver { score: 0 }.notify(&mut sink);
        GameEvent::LinesCleared(4).notify(&mut sink);
    }
}
