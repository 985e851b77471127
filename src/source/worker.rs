//! Background thread with cooperative, prompt cancellation.

use crate::model::TimerError;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Owned background thread that stops when dropped.
///
/// The body receives a [`StopSignal`]; dropping the worker disconnects it,
/// which wakes any pending [`StopSignal::sleep`] immediately. Drop joins the
/// thread, so once it returns the body can no longer emit anything.
#[derive(Debug)]
pub(crate) struct Worker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawn a named worker thread running `body`.
    pub(crate) fn spawn<F>(name: &str, body: F) -> Result<Self, TimerError>
    where
        F: FnOnce(StopSignal) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || body(StopSignal { rx: stop_rx }))
            .map_err(TimerError::Spawn)?;

        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Whether the body is still running.
    pub(crate) fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Disconnecting the channel wakes the body.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Cancellation side of a [`Worker`].
#[derive(Debug)]
pub(crate) struct StopSignal {
    rx: Receiver<()>,
}

impl StopSignal {
    /// Sleep for `period`. Returns `false` if the worker was stopped meanwhile.
    pub(crate) fn sleep(&self, period: Duration) -> bool {
        matches!(self.rx.recv_timeout(period), Err(RecvTimeoutError::Timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn drop_wakes_a_long_sleep_promptly() {
        let worker = Worker::spawn("test-sleeper", |stop| {
            while stop.sleep(Duration::from_secs(60)) {}
        })
        .expect("spawn");

        let started = Instant::now();
        drop(worker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn body_runs_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let worker = Worker::spawn("test-counter", move |stop| {
            while stop.sleep(Duration::from_millis(1)) {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        })
        .expect("spawn");

        while count.load(Ordering::SeqCst) < 3 {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(worker.is_running());
        drop(worker);

        let after_drop = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
