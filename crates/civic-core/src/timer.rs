//! Clock-driven timers
//!
//! Both machines are pure: the caller supplies `now_ms` and owns whatever
//! real timer wakes it up. Replacing or dropping that handle cancels the wait.

/// Holds the latest value until it has been quiet for `delay_ms`
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace any pending value and restart the quiet period
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    /// The pending value once its quiet period has elapsed
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.due_at().is_some_and(|due| due <= now_ms) {
            self.flush()
        } else {
            None
        }
    }

    /// Release the pending value immediately
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }
}

/// Resend countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration_secs: u64,
    started_at_ms: Option<u64>,
}

impl Countdown {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            duration_secs,
            started_at_ms: None,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.started_at_ms = None;
    }

    /// Whole seconds left, rounded up
    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        match self.started_at_ms {
            Some(started) => {
                let end = started + self.duration_secs * 1000;
                end.saturating_sub(now_ms).div_ceil(1000)
            }
            None => 0,
        }
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        self.remaining_secs(now_ms) > 0
    }

    /// "M:SS"
    pub fn label(&self, now_ms: u64) -> String {
        let secs = self.remaining_secs(now_ms);
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_keeps_last_value() {
        let mut d = Debouncer::new(300);
        d.push("P", 0);
        d.push("Pr", 100);
        d.push("Pro", 200);
        assert_eq!(d.poll(400), None);
        assert_eq!(d.poll(500), Some("Pro"));
        assert_eq!(d.poll(900), None);
    }

    #[test]
    fn test_debounce_cancel_and_flush() {
        let mut d = Debouncer::new(300);
        d.push(1, 0);
        d.cancel();
        assert_eq!(d.poll(1_000), None);
        d.push(2, 0);
        assert_eq!(d.due_at(), Some(300));
        assert_eq!(d.flush(), Some(2));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_due_at_restarts_on_push() {
        let mut d = Debouncer::new(300);
        assert_eq!(d.due_at(), None);
        d.push("a", 1_000);
        assert_eq!(d.due_at(), Some(1_300));
        d.push("ab", 1_250);
        assert_eq!(d.due_at(), Some(1_550));
        assert_eq!(d.poll(1_300), None);
        assert_eq!(d.poll(1_550), Some("ab"));
        assert_eq!(d.due_at(), None);
    }

    #[test]
    fn test_countdown() {
        let mut c = Countdown::new(60);
        assert!(!c.is_active(0));
        c.start(1_000);
        assert_eq!(c.label(1_000), "1:00");
        assert_eq!(c.label(1_500), "1:00");
        assert_eq!(c.label(2_000), "0:59");
        assert_eq!(c.label(52_000), "0:09");
        assert!(c.is_active(60_999));
        assert!(!c.is_active(61_000));
        assert_eq!(c.label(90_000), "0:00");
    }
}
