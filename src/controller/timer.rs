//! One-shot, cancelable delay used for the entrance transition.

use std::sync::mpsc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Fires once after a delay. Dropping the timer cancels it, so a fired
/// signal can never reach an owner that no longer exists.
pub struct LoadTimer {
    handle: JoinHandle<()>,
    receiver: mpsc::Receiver<()>,
    delay: Duration,
}

impl LoadTimer {
    /// Spawn the delay on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn schedule(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        });
        Self {
            handle,
            receiver: rx,
            delay,
        }
    }

    /// Non-blocking check for the signal. Returns true at most once.
    pub fn fired(&self) -> bool {
        self.receiver.try_recv().is_ok()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for LoadTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let timer = LoadTimer::schedule(Duration::from_millis(300));
        tokio::task::yield_now().await;
        assert!(!timer.fired());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(!timer.fired());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(timer.fired());
        // Only once.
        assert!(!timer.fired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let timer = LoadTimer::schedule(Duration::from_millis(300));
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(!timer.fired());
    }
}
