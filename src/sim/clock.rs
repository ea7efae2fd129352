//! Fixed-rate tick timer
//!
//! Turns measured frame time into a whole number of `TICK_MS` steps. The
//! remainder carries over to the next frame.

use crate::consts::*;

#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator: f32,
    running: bool,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    /// Tear the timer down; pending time is dropped and no tick fires until
    /// the next `start`
    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add elapsed milliseconds and return how many ticks are due now
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !self.running || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }

        // Cap a long stall (tab switch, debugger) at the substep limit
        let max_ms = TICK_MS * MAX_SUBSTEPS as f32;
        self.accumulator = (self.accumulator + elapsed_ms).min(max_ms);

        let due = ((self.accumulator / TICK_MS) as u32).min(MAX_SUBSTEPS);
        self.accumulator = (self.accumulator - due as f32 * TICK_MS).max(0.0);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_clock_never_fires() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(100.0), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = TickClock::new();
        clock.start();
        assert_eq!(clock.advance(TICK_MS * 0.6), 0);
        assert_eq!(clock.advance(TICK_MS * 0.6), 1);
        assert_eq!(clock.advance(TICK_MS * 2.0), 2);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = TickClock::new();
        clock.start();
        assert_eq!(clock.advance(10_000.0), MAX_SUBSTEPS);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_stop_drops_pending_time() {
        let mut clock = TickClock::new();
        clock.start();
        clock.advance(TICK_MS * 0.9);
        clock.stop();
        assert!(!clock.is_running());
        clock.start();
        assert_eq!(clock.advance(TICK_MS * 0.5), 0);
    }
}
