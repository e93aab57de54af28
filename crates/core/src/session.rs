//! Session - the single dispatch point for a running game
//!
//! Keyboard actions and drop-timer ticks both go through [`Session`], so the
//! reducer sees exactly one transition at a time. Each transition swaps in a
//! new `Arc<GameState>`; snapshots handed out earlier stay valid and are never
//! modified.

use std::sync::Arc;

use crate::{DropCadence, DropTimer, FeedbackSink, GameState, PieceSource};
use crate::types::GameAction;

#[derive(Debug)]
pub struct Session<S: PieceSource> {
    state: Arc<GameState>,
    pieces: S,
    timer: DropTimer,
}

impl<S: PieceSource> Session<S> {
    /// Start a fresh game drawing pieces from `pieces`
    pub fn new(mut pieces: S, cadence: DropCadence) -> Self {
        let state = GameState::new(&mut pieces);
        Self::from_state(state, pieces, cadence)
    }

    /// Resume from an existing state
    pub fn from_state(state: GameState, pieces: S, cadence: DropCadence) -> Self {
        let timer = DropTimer::new(cadence, state.level);
        Self {
            state: Arc::new(state),
            pieces,
            timer,
        }
    }

    /// The current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A shared handle to the current state, unaffected by later transitions
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Period of the automatic drop at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        self.timer.interval_ms()
    }

    /// Apply one action, then notify `sink` of what happened
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: GameAction, sink: &mut dyn FeedbackSink) -> bool {
        let transition = self.state.reduce(action, &mut self.pieces);
        let changed = transition.state != *self.state;

        if self.timer.rearm(transition.state.level) {
            log::debug!(
                "drop interval now {}ms at level {}",
                self.timer.interval_ms(),
                transition.state.level
            );
        }

        if changed {
            log::trace!("{} -> {} event(s)", action.as_str(), transition.events.len());
        }
        self.state = Arc::new(transition.state);

        for event in &transition.events {
            event.notify(sink);
        }
        changed
    }

    /// Advance the drop timer by `elapsed_ms`, dispatching one `MoveDown` per expired period
    ///
    /// While paused the drops still fire and are rejected by the guard rule.
    /// Returns `true` if any drop changed the state.
    pub fn tick(&mut self, elapsed_ms: u32, sink: &mut dyn FeedbackSink) -> bool {
        let due = self.timer.advance(elapsed_ms);
        let mut changed = false;
        for _ in 0..due {
            let level = self.state.level;
            changed |= self.dispatch(GameAction::MoveDown, sink);
            // A level change re-armed the timer; the remaining drops belonged to the old cadence.
            if self.state.level != level {
                break;
            }
        }
        changed
    }
}
