use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

const MIN_PERIOD: Duration = Duration::from_millis(1);
/// Longer periods are clamped so the first deadline is always representable.
const MAX_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// A repeating callback owned by whoever started it.
///
/// The first tick fires one full period after `start`. The underlying task is
/// aborted by `cancel` or when the guard is dropped, so nothing scheduled here
/// outlives its owner.
#[derive(Debug)]
pub struct ScopedInterval {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl ScopedInterval {
    /// Must be called from within a tokio runtime.
    pub fn start<F, Fut>(name: &'static str, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = period.clamp(MIN_PERIOD, MAX_PERIOD);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                on_tick().await;
            }
        });

        debug!("Started interval {} every {:?}", name, period);

        Self {
            name,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Cancelled interval {}", self.name);
        }
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_interval(period: Duration) -> (ScopedInterval, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let interval = ScopedInterval::start("test", period, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        (interval, count)
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let (_interval, count) = counting_interval(Duration::from_millis(3000));

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let (mut interval, count) = counting_interval(Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        interval.cancel();
        interval.cancel();
        assert!(!interval.is_active());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_period_is_clamped_instead_of_overflowing() {
        let (interval, count) = counting_interval(Duration::from_secs(u64::MAX));

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(interval.is_active());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticks() {
        let (interval, count) = counting_interval(Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(150)).await;
        drop(interval);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
