//! Blink timing for the pseudo cursor.

/// Tick-driven blink state for the cursor mark.
///
/// At the 16 ms frame tick a half cycle of 31 ticks is about 500 ms, giving a
/// one-second on/off period. Placing the cursor restarts the cycle in the
/// visible phase.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    anchor_tick: u64,
    visible: bool,
    half_cycle_ticks: u64,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlink {
    pub fn new() -> Self {
        Self {
            anchor_tick: 0,
            visible: true,
            half_cycle_ticks: 31,
        }
    }

    /// Restart the cycle at `current_tick`, visible.
    pub fn reset(&mut self, current_tick: u64) {
        self.anchor_tick = current_tick;
        self.visible = true;
    }

    /// Recompute visibility. Returns `true` if it changed.
    pub fn update(&mut self, current_tick: u64) -> bool {
        let elapsed = current_tick.saturating_sub(self.anchor_tick);
        let visible = (elapsed / self.half_cycle_ticks) % 2 == 0;
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
