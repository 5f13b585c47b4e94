use stash_core::SimTick;

/// Rate limit owned by a trigger instance.
///
/// The first call always passes; later calls pass once at least `ticks`
/// ticks have elapsed since the last call that passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldown {
    ticks: u64,
    last: Option<SimTick>,
}

impl Cooldown {
    /// Cooldown of `ticks` ticks.
    pub fn new(ticks: u64) -> Self {
        Self { ticks, last: None }
    }

    /// Configured length.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start a new period at `now` if the previous one has elapsed.
    pub fn try_start(&mut self, now: SimTick) -> bool {
        let ready = match self.last {
            None => true,
            Some(last) => now.since(last) >= self.ticks,
        };
        if ready {
            self.last = Some(now);
        }
        ready
    }

    /// Forget the last start.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_after_full_period() {
        let mut cooldown = Cooldown::new(8);
        assert!(cooldown.try_start(SimTick(100)));
        assert!(!cooldown.try_start(SimTick(107)));
        assert!(cooldown.try_start(SimTick(108)));
        assert!(!cooldown.try_start(SimTick(108)));
    }

    #[test]
    fn zero_ticks_never_blocks() {
        let mut cooldown = Cooldown::new(0);
        assert!(cooldown.try_start(SimTick(5)));
        assert!(cooldown.try_start(SimTick(5)));
    }

    #[test]
    fn reset_allows_immediate_start() {
        let mut cooldown = Cooldown::new(6);
        assert!(cooldown.try_start(SimTick(1)));
        cooldown.reset();
        assert!(cooldown.try_start(SimTick(2)));
    }
}
