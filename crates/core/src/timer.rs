//! Drop timer - level-dependent auto-drop cadence
//!
//! The timer accumulates elapsed time and reports how many drop periods have
//! expired. When the level changes it is re-armed with the new period and any
//! time accumulated under the old period is discarded.

use crate::scoring::DropCadence;

#[derive(Debug, Clone, PartialEq)]
pub struct DropTimer {
    cadence: DropCadence,
    level: u32,
    interval_ms: u32,
    elapsed_ms: u32,
}

impl DropTimer {
    pub fn new(cadence: DropCadence, level: u32) -> Self {
        Self {
            cadence,
            level,
            interval_ms: cadence.interval_ms(level),
            elapsed_ms: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current drop period
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next drop
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Switch to the period for `level`
    ///
    /// Returns `true` if the level changed, in which case the partial period
    /// is dropped so no tick from the old cadence fires late.
    pub fn rearm(&mut self, level: u32) -> bool {
        if level == self.level {
            return false;
        }
        self.level = level;
        self.interval_ms = self.cadence.interval_ms(level);
        self.elapsed_ms = 0;
        true
    }

    /// Add `elapsed_ms` and return how many drops are due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = total / self.interval_ms;
        self.elapsed_ms = total % self.interval_ms;
        due
    }
}
