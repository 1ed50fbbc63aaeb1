use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// A facility that delivers periodic ticks for as long as a registration is held.
pub trait TickSource {
    type Handle;

    fn acquire(&mut self, period: Duration) -> Self::Handle;

    fn release(&mut self, handle: Self::Handle);
}

/// Ticks backed by a tokio interval. Must be used from within a tokio runtime.
#[derive(Debug, Default)]
pub struct IntervalSource {
    active: usize,
}

impl IntervalSource {
    /// Number of registrations currently held.
    pub fn active(&self) -> usize {
        self.active
    }
}

impl TickSource for IntervalSource {
    type Handle = Interval;

    fn acquire(&mut self, period: Duration) -> Interval {
        self.active += 1;
        tracing::trace!(active = self.active, ?period, "acquired a tick interval");

        // tokio intervals fire immediately by default; the first tick is one period out.
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        interval
    }

    fn release(&mut self, interval: Interval) {
        drop(interval);
        self.active = self.active.saturating_sub(1);
        tracing::trace!(active = self.active, "released a tick interval");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_one_period_out() {
        let mut source = IntervalSource::default();
        let start = Instant::now();
        let mut interval = source.acquire(Duration::from_millis(10));

        interval.tick().await;

        assert_eq!(start.elapsed(), Duration::from_millis(10));
        assert_eq!(source.active(), 1);

        source.release(interval);
        assert_eq!(source.active(), 0);
    }
}
