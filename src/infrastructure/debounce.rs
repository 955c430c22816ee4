use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{task::JoinHandle, time::Instant};

/// Default hover-off delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Trailing-edge debouncer on the tokio timer
///
/// Each [`call`](Debouncer::call) replaces the pending invocation, so a burst
/// of calls runs the callback once, with the last arguments, `delay` after
/// the last call. Dropping the debouncer cancels whatever is pending.
/// Must be used from within a tokio runtime.
pub struct Debouncer<A> {
    delay: Duration,
    callback: Callback<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `callback(args)` after the delay, superseding any pending call
    pub fn call(&self, args: A) {
        let callback = Arc::clone(&self.callback);
        // Deadline is taken now, not when the task is first polled
        let deadline = Instant::now() + self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback(args);
        });

        if let Some(previous) = self.lock().replace(task) {
            previous.abort();
        }
    }

    /// Drop the pending call, returning whether one was still waiting
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(task) => {
                let was_pending = !task.is_finished();
                task.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The guarded value is a plain handle, still valid after a panic
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = pending.take() {
            task.abort();
        }
    }
}

impl<A> std::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;

    fn recording(delay: Duration) -> (Debouncer<u32>, mpsc::UnboundedReceiver<u32>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(delay, move |value| {
            let _ = tx.send(value);
        });
        (debouncer, rx)
    }

    /// Let spawned timer tasks observe the advanced clock
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_once_after_delay() {
        let (debouncer, mut rx) = recording(Duration::from_millis(300));
        debouncer.call(1);
        assert!(debouncer.is_pending());

        tokio::time::advance(Duration::from_millis(299)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(rx.try_recv().ok(), Some(1));
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_uses_last_arguments() {
        let (debouncer, mut rx) = recording(Duration::from_millis(300));
        for value in 1..=5 {
            debouncer.call(value);
            tokio::time::advance(Duration::from_millis(100)).await;
            settle().await;
        }
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(200)).await;
        settle().await;
        assert_eq!(rx.try_recv().ok(), Some(5));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_call() {
        let (debouncer, mut rx) = recording(Duration::from_millis(300));
        debouncer.call(1);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_prevents_call() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let debouncer = Debouncer::new(Duration::from_millis(300), move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.call(());
        drop(debouncer);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_fire_separately() {
        let (debouncer, mut rx) = recording(Duration::from_millis(300));
        debouncer.call(1);
        tokio::time::advance(Duration::from_millis(300)).await;
        settle().await;
        debouncer.call(2);
        tokio::time::advance(Duration::from_millis(300)).await;
        settle().await;

        assert_eq!(rx.try_recv().ok(), Some(1));
        assert_eq!(rx.try_recv().ok(), Some(2));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(DEFAULT_DELAY, Duration::from_millis(300));
    }
}
