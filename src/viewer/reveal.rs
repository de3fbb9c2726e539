//! Line-reveal ("typing") animation state.

use std::time::Duration;

/// Interval between reveal ticks.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(25);

/// A full reveal takes about this many ticks regardless of file length.
pub const REVEAL_STEPS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Revealing,
    Complete,
}

/// Visible-line counter for the open file.
///
/// `visible_lines` only grows while revealing and never passes
/// `total_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealAnimation {
    total_lines: usize,
    visible_lines: usize,
    phase: RevealPhase,
}

impl RevealAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from zero visible lines.
    pub fn start(&mut self, total_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = 0;
        self.phase = if total_lines == 0 {
            RevealPhase::Complete
        } else {
            RevealPhase::Revealing
        };
    }

    /// Show everything at once.
    pub fn complete(&mut self, total_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = total_lines;
        self.phase = RevealPhase::Complete;
    }

    /// Advance one tick. Returns whether the reveal is still running.
    pub fn advance(&mut self) -> bool {
        if self.phase != RevealPhase::Revealing {
            return false;
        }
        self.visible_lines = (self.visible_lines + self.lines_per_tick()).min(self.total_lines);
        if self.visible_lines >= self.total_lines {
            self.phase = RevealPhase::Complete;
            return false;
        }
        true
    }

    pub fn lines_per_tick(&self) -> usize {
        (self.total_lines / REVEAL_STEPS).max(1)
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RevealPhase::Revealing
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let reveal = RevealAnimation::new();
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        assert_eq!(reveal.visible_lines(), 0);
    }

    #[test]
    fn test_step_size() {
        let mut reveal = RevealAnimation::new();
        reveal.start(10);
        assert_eq!(reveal.lines_per_tick(), 1);
        reveal.start(95);
        assert_eq!(reveal.lines_per_tick(), 3);
    }

    #[test]
    fn test_reveal_reaches_total_exactly() {
        for total in [1, 7, 29, 30, 31, 64, 100, 301] {
            let mut reveal = RevealAnimation::new();
            reveal.start(total);
            let mut last = reveal.visible_lines();
            while reveal.advance() {
                assert!(reveal.visible_lines() >= last);
                assert!(reveal.visible_lines() <= total);
                last = reveal.visible_lines();
            }
            assert_eq!(reveal.visible_lines(), total);
            assert_eq!(reveal.phase(), RevealPhase::Complete);
        }
    }

    #[test]
    fn test_empty_file_completes_immediately() {
        let mut reveal = RevealAnimation::new();
        reveal.start(0);
        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert!(!reveal.advance());
    }

    #[test]
    fn test_complete_jumps_to_total() {
        let mut reveal = RevealAnimation::new();
        reveal.start(50);
        reveal.advance();
        reveal.complete(50);
        assert_eq!(reveal.visible_lines(), 50);
        assert!(!reveal.is_running());
        assert!(!reveal.advance());
        assert_eq!(reveal.visible_lines(), 50);
    }
}
