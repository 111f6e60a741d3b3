//! Trailing-edge debouncer for bursty input.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesce rapid calls: only the latest action runs, `delay` after the
/// burst goes quiet.
///
/// Built for search boxes wired to `BrowseSession::set_search_query`, where
/// recomputing the view on every keystroke is wasted work.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action`, cancelling any action still waiting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop whatever is still pending without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn only_the_last_call_of_a_burst_runs() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(25));

        for _ in 0..3 {
            let runs = runs.clone();
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn separate_bursts_each_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        for _ in 0..2 {
            let runs = runs.clone();
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(80)).await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cancel_discards_the_pending_action() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        {
            let runs = runs.clone();
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
