//! Repeating one-second tick that drives the elapsed-time counter

use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::debug;

/// Period of the elapsed-time counter
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owner of the single tick task. Arming a new task aborts the previous one,
/// and dropping the owner aborts whatever is running.
#[derive(Debug, Default)]
pub struct ElapsedTimer {
    handle: Option<JoinHandle<()>>,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task calling `on_tick` every `period`, first one `period` from now.
    /// The task ends when `on_tick` returns false.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if !on_tick() {
                    debug!("Elapsed timer tick rejected, ending tick task");
                    break;
                }
            }
        });
        self.handle = Some(handle);
    }

    /// Abort the running tick task, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Elapsed timer task aborted");
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    };
    use tokio::time::sleep;

    fn counting(counter: &Arc<AtomicU64>) -> impl FnMut() -> bool + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut timer = ElapsedTimer::new();
        timer.start(TICK_PERIOD, counting(&counter));

        sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        sleep(Duration::from_millis(2000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_task() {
        let first = Arc::new(AtomicU64::new(0));
        let second = Arc::new(AtomicU64::new(0));
        let mut timer = ElapsedTimer::new();

        timer.start(TICK_PERIOD, counting(&first));
        sleep(Duration::from_millis(1500)).await;
        timer.start(TICK_PERIOD, counting(&second));
        sleep(Duration::from_millis(1500)).await;

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_and_drop_abort_the_task() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut timer = ElapsedTimer::new();
        timer.start(TICK_PERIOD, counting(&counter));
        timer.stop();
        assert!(!timer.is_running());
        sleep(Duration::from_secs(3)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        timer.start(TICK_PERIOD, counting(&counter));
        drop(timer);
        sleep(Duration::from_secs(3)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_ends_when_tick_is_rejected() {
        let mut timer = ElapsedTimer::new();
        timer.start(TICK_PERIOD, || false);
        sleep(Duration::from_millis(1500)).await;
        assert!(!timer.is_running());
    }
}
