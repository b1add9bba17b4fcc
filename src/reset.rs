use log::{debug, warn};

/// What the reset line did on an edge
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResetEdge {
    /// rst_n high, normal operation
    Running,
    /// rst_n low, state untouched
    Held,
    /// rst_n low long enough, state must be cleared on this edge
    Cleared,
    /// rst_n back high after a complete reset
    Released,
    /// rst_n back high before the hold requirement was met
    Aborted,
}

/// Samples the active low reset line
pub struct ResetLine {
    /// Consecutive edges rst_n has been low
    low_cycles: u8,
    /// Required hold before the state is cleared
    min_cycles: u8,
}

impl ResetLine {
    pub fn new(min_cycles: u8) -> Self {
        Self {
            low_cycles: 0,
            min_cycles: min_cycles.max(1),
        }
    }

    pub fn in_reset(&self) -> bool {
        self.low_cycles > 0
    }

    pub fn sample(&mut self, rst_n: bool) -> ResetEdge {
        if !rst_n {
            let before = self.low_cycles;
            self.low_cycles = self.low_cycles.saturating_add(1);
            if before < self.min_cycles && self.low_cycles >= self.min_cycles {
                ResetEdge::Cleared
            } else {
                ResetEdge::Held
            }
        } else if self.low_cycles == 0 {
            ResetEdge::Running
        } else if self.low_cycles >= self.min_cycles {
            debug!("reset released after {} cycle(s)", self.low_cycles);
            self.low_cycles = 0;
            ResetEdge::Released
        } else {
            warn!("reset pulse too short: {} of {} cycle(s), ignored", self.low_cycles, self.min_cycles);
            self.low_cycles = 0;
            ResetEdge::Aborted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_runs_while_high() {
        let mut line = ResetLine::new(1);

        assert_eq!(line.sample(true), ResetEdge::Running);
        assert!(!line.in_reset());
    }

    #[test]
    fn it_clears_once_per_hold() {
        let mut line = ResetLine::new(3);

        assert_eq!(line.sample(false), ResetEdge::Held);
        assert_eq!(line.sample(false), ResetEdge::Held);
        assert_eq!(line.sample(false), ResetEdge::Cleared);
        assert_eq!(line.sample(false), ResetEdge::Held);
        assert!(line.in_reset());
        assert_eq!(line.sample(true), ResetEdge::Released);
        assert_eq!(line.sample(true), ResetEdge::Running);
    }

    #[test]
    fn it_aborts_short_pulses() {
        let mut line = ResetLine::new(10);

        assert_eq!(line.sample(false), ResetEdge::Held);
        assert_eq!(line.sample(true), ResetEdge::Aborted);
        assert_eq!(line.sample(true), ResetEdge::Running);
    }

    #[test]
    fn it_survives_very_long_holds() {
        let mut line = ResetLine::new(1);

        assert_eq!(line.sample(false), ResetEdge::Cleared);
        for _ in 0..300 {
            assert_eq!(line.sample(false), ResetEdge::Held);
        }
        assert_eq!(line.sample(true), ResetEdge::Released);
    }

    #[test]
    fn it_clears_once_at_the_largest_hold() {
        let mut line = ResetLine::new(u8::MAX);

        for _ in 1..u8::MAX {
            assert_eq!(line.sample(false), ResetEdge::Held);
        }
        assert_eq!(line.sample(false), ResetEdge::Cleared);
        assert_eq!(line.sample(false), ResetEdge::Held);
    }
}
