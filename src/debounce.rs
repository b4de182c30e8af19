use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Trailing-edge debounce timer. `schedule` re-arms the timer, cancelling any
/// pending fire, so a burst of calls runs the action exactly once, `delay`
/// after the last call. `cancel` drops the pending fire without replacement.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn schedule<F, Fut>(&self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let armed = token.clone();
        if let Some(previous) = self.swap_pending(Some(token)) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = armed.cancelled() => {}
                _ = tokio::time::sleep(delay) => action().await,
            }
        });
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.swap_pending(None) {
            previous.cancel();
        }
    }

    fn swap_pending(&self, next: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *pending, next)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_the_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        let count = fired.clone();
        debouncer.schedule(move || async move {
            count.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_collapses_a_burst_into_one_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let count = fired.clone();
            debouncer.schedule(move || async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let fired = Arc::new(AtomicUsize::new(0));

        let count = fired.clone();
        debouncer.schedule(move || async move {
            count.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
