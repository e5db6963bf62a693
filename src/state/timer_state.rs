//! Elapsed-time counter shown while the user works on a phrase

/// Seconds since the current phrase was generated
#[derive(Debug, Clone, Default)]
pub struct TimerState {
    pub active: bool,
    pub elapsed_seconds: u64,
    /// Identifies the tick source allowed to advance the counter
    epoch: u64,
}

impl TimerState {
    /// Create an inactive timer at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and hand out the epoch of a fresh tick source
    pub fn arm(&mut self) -> u64 {
        self.epoch += 1;
        self.elapsed_seconds = 0;
        self.active = true;
        self.epoch
    }

    /// Deactivate; any tick source armed before this call becomes stale
    pub fn stop(&mut self) {
        self.epoch += 1;
        self.active = false;
    }

    /// Stop and zero the counter
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Advance by one second if `epoch` is the current tick source.
    /// Returns whether the counter moved.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if !self.active || epoch != self.epoch {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_resets_and_activates() {
        let mut timer = TimerState::new();
        let epoch = timer.arm();
        assert!(timer.tick(epoch));
        assert!(timer.tick(epoch));
        assert_eq!(timer.elapsed_seconds, 2);

        timer.arm();
        assert!(timer.is_active());
        assert_eq!(timer.elapsed_seconds, 0);
    }

    #[test]
    fn test_stale_epoch_does_not_tick() {
        let mut timer = TimerState::new();
        let old = timer.arm();
        let new = timer.arm();
        assert!(!timer.tick(old));
        assert!(timer.tick(new));
        assert_eq!(timer.elapsed_seconds, 1);
    }

    #[test]
    fn test_stop_keeps_elapsed_and_blocks_ticks() {
        let mut timer = TimerState::new();
        let epoch = timer.arm();
        timer.tick(epoch);
        timer.stop();
        assert!(!timer.tick(epoch));
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed_seconds, 1);

        timer.reset();
        assert_eq!(timer.elapsed_seconds, 0);
    }
}
