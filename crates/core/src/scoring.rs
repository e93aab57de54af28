//! Scoring module - line-clear points, leveling and drop cadence
//!
//! - Clearing `n` lines awards `n * 100 * level`, using the level in force
//!   before the clear.
//! - The level is a pure function of the cumulative score:
//!   `floor(score / 1000) + 1`.
//! - The automatic drop interval is `base * decay^(level - 1)`.

use crate::types::{BASE_DROP_MS, DROP_DECAY, DROP_INTERVAL_MIN_MS, POINTS_PER_LEVEL, POINTS_PER_LINE};

/// Points for clearing `lines` rows at `level`
///
/// # Examples
///
/// ```
/// use tui_blocks_core::calculate_score;
///
/// assert_eq!(calculate_score(0, 3), 0);
/// assert_eq!(calculate_score(1, 1), 100);
/// assert_eq!(calculate_score(4, 2), 800);
/// ```
pub fn calculate_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level reached with a cumulative `score`
///
/// # Examples
///
/// ```
/// use tui_blocks_core::level_for_score;
///
/// assert_eq!(level_for_score(0), 1);
/// assert_eq!(level_for_score(999), 1);
/// assert_eq!(level_for_score(1000), 2);
/// ```
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Automatic drop cadence: a base interval that decays geometrically per level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropCadence {
    pub base_ms: u32,
    pub decay: f64,
}

impl Default for DropCadence {
    fn default() -> Self {
        Self {
            base_ms: BASE_DROP_MS,
            decay: DROP_DECAY,
        }
    }
}

impl DropCadence {
    pub fn new(base_ms: u32, decay: f64) -> Self {
        Self { base_ms, decay }
    }

    /// Drop interval at `level`, floored to whole milliseconds and never below 1ms
    pub fn interval_ms(&self, level: u32) -> u32 {
        let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
        let interval = self.base_ms as f64 * self.decay.powi(exponent);
        (interval.floor() as u32).max(DROP_INTERVAL_MIN_MS)
    }
}

/// Drop interval at `level` under the default cadence
pub fn get_drop_interval_ms(level: u32) -> u32 {
    DropCadence::default().interval_ms(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_uses_level_multiplier() {
        assert_eq!(calculate_score(1, 1), 100);
        assert_eq!(calculate_score(2, 1), 200);
        assert_eq!(calculate_score(3, 5), 1500);
        assert_eq!(calculate_score(u32::MAX, 2), u32::MAX);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(1999), 2);
        assert_eq!(level_for_score(2000), 3);
        assert_eq!(level_for_score(u32::MAX), u32::MAX / 1000 + 1);
    }

    #[test]
    fn test_default_drop_intervals() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 800);
        assert_eq!(get_drop_interval_ms(3), 640);
        assert_eq!(get_drop_interval_ms(4), 512);
        assert_eq!(get_drop_interval_ms(5), 409);
    }

    #[test]
    fn test_drop_interval_is_floored_at_one_ms() {
        assert_eq!(get_drop_interval_ms(200), DROP_INTERVAL_MIN_MS);
        assert_eq!(DropCadence::new(0, 0.8).interval_ms(1), DROP_INTERVAL_MIN_MS);
    }

    #[test]
    fn test_custom_cadence() {
        let cadence = DropCadence::new(500, 0.5);
        assert_eq!(cadence.interval_ms(1), 500);
        assert_eq!(cadence.interval_ms(2), 250);
        assert_eq!(cadence.interval_ms(3), 125);
        // Level 0 is treated like level 1.
        assert_eq!(cadence.interval_ms(0), 500);
    }
}
