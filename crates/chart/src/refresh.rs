//! Debounced repaint scheduling.
//!
//! Mutations mark the chart dirty and push the repaint deadline back by the
//! refresh delay, so a burst of changes produces a single repaint once the
//! burst goes quiet. Time is passed in by the caller; nothing here sleeps or
//! spawns.

use std::time::{Duration, Instant};

/// Where the chart is in its repaint cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// Painted output matches the data.
    Clean,
    /// Data changed; repaint once `due` has passed.
    DirtyPending { due: Instant },
    /// A repaint is running.
    Recomputing,
}

/// Drives [`RefreshState`] transitions for one chart.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    delay: Duration,
    state: RefreshState,
}

impl RefreshScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: RefreshState::Clean,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, RefreshState::DirtyPending { .. })
    }

    /// Record a mutation at `now`. Re-arms the deadline if one is pending.
    pub fn mark_dirty(&mut self, now: Instant) {
        let due = now + self.delay;
        tracing::trace!(?due, previous = ?self.state, "refresh scheduled");
        self.state = RefreshState::DirtyPending { due };
    }

    /// Start a repaint if the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            RefreshState::DirtyPending { due } if now >= due => {
                tracing::trace!("refresh due");
                self.state = RefreshState::Recomputing;
                true
            }
            _ => false,
        }
    }

    /// Start a repaint now if anything is pending, ignoring the deadline.
    pub fn force(&mut self) -> bool {
        if self.is_dirty() {
            tracing::trace!("refresh forced");
            self.state = RefreshState::Recomputing;
            true
        } else {
            false
        }
    }

    /// Finish a repaint. A mutation recorded meanwhile stays pending.
    pub fn finish(&mut self) {
        if self.state == RefreshState::Recomputing {
            tracing::trace!("refresh finished");
            self.state = RefreshState::Clean;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_starts_clean() {
        let mut scheduler = RefreshScheduler::new(DELAY);
        assert_eq!(scheduler.state(), RefreshState::Clean);
        assert!(!scheduler.poll(Instant::now()));
        assert!(!scheduler.force());
    }

    #[test]
    fn test_waits_for_deadline() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(DELAY);
        scheduler.mark_dirty(start);

        assert!(!scheduler.poll(start + Duration::from_millis(99)));
        assert!(scheduler.poll(start + DELAY));
        assert_eq!(scheduler.state(), RefreshState::Recomputing);

        scheduler.finish();
        assert_eq!(scheduler.state(), RefreshState::Clean);
    }

    #[test]
    fn test_burst_re_arms_deadline() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(DELAY);
        for step in 0..5 {
            scheduler.mark_dirty(start + Duration::from_millis(step * 50));
        }

        // last mark at 200ms, so nothing is due before 300ms
        assert!(!scheduler.poll(start + Duration::from_millis(250)));
        assert!(scheduler.poll(start + Duration::from_millis(300)));
        assert!(!scheduler.poll(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_mark_during_recompute_stays_pending() {
        let start = Instant::now();
        let mut scheduler = RefreshScheduler::new(DELAY);
        scheduler.mark_dirty(start);
        assert!(scheduler.force());

        scheduler.mark_dirty(start + Duration::from_millis(10));
        scheduler.finish();
        assert!(scheduler.is_dirty());
    }
}
