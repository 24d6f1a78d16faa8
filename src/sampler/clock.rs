use std::time::{Duration, Instant};

/// Time of the last successful analysis, gating how often the classifier runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisClock {
    last: Option<Instant>,
}

impl AnalysisClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Instant> {
        self.last
    }

    /// An analysis is due once strictly more than `every` has passed since the
    /// last one. Never having analyzed counts as due.
    pub fn is_due(&self, now: Instant, every: Duration) -> bool {
        self.last
            .map(|last| now.saturating_duration_since(last) > every)
            .unwrap_or(true)
    }

    pub fn mark(&mut self, at: Instant) {
        self.last = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERY: Duration = Duration::from_millis(600);

    #[test]
    fn unset_clock_is_due() {
        assert!(AnalysisClock::new().is_due(Instant::now(), EVERY));
    }

    #[test]
    fn gate_opens_strictly_after_interval() {
        let start = Instant::now();
        let mut clock = AnalysisClock::new();
        clock.mark(start);

        assert!(!clock.is_due(start, EVERY));
        assert!(!clock.is_due(start + Duration::from_millis(599), EVERY));
        assert!(!clock.is_due(start + EVERY, EVERY));
        assert!(clock.is_due(start + Duration::from_millis(601), EVERY));
    }

    #[test]
    fn earlier_instant_is_not_due() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut clock = AnalysisClock::new();
        clock.mark(start);
        assert!(!clock.is_due(start - Duration::from_secs(1), EVERY));
    }
}
