use std::time::{Duration, Instant};

/// Fixed instant at which the session budget runs out.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        let now = Instant::now();
        let at = now
            .checked_add(budget)
            .unwrap_or_else(|| now + Duration::from_secs(60 * 60 * 24 * 365));
        Deadline { at }
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn has_passed(&self) -> bool {
        Instant::now() >= self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_has_passed() {
        let deadline = Deadline::after(Duration::from_secs(0));
        assert!(deadline.has_passed());
        assert_eq!(deadline.remaining(), Duration::from_secs(0));
    }

    #[test]
    fn remaining_never_grows() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.has_passed());
        let first = deadline.remaining();
        std::thread::sleep(Duration::from_millis(5));
        let second = deadline.remaining();
        assert!(second < first);
        assert!(first <= Duration::from_secs(60));
    }
}
