//! Periodic idle-timer ticks.

use crate::model::TimerError;
use crate::source::worker::Worker;
use std::ops::ControlFlow;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tracing::{debug, trace};

/// Fires on a fixed period until dropped.
///
/// Ticks run on a background thread. Deliver them to the owning context over
/// a channel with [`IdleTimer::forward`]; the state machine itself is never
/// touched off its owner.
///
/// Dropping the timer cancels it. The sleeping thread is woken at once, and
/// after `drop` returns no further tick is produced.
#[derive(Debug)]
pub struct IdleTimer {
    period: Duration,
    worker: Worker,
}

impl IdleTimer {
    /// Call `on_tick` every `period` until it returns `Break` or the timer is
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`TimerError::Spawn`] if the thread cannot be created.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Result<Self, TimerError>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let worker = Worker::spawn("idle-timer", move |stop| {
            while stop.sleep(period) {
                if on_tick().is_break() {
                    break;
                }
            }
            trace!("idle timer thread exiting");
        })?;

        debug!(period_ms = period.as_millis() as u64, "idle timer started");
        Ok(Self { period, worker })
    }

    /// Send a clone of `event` to `tx` every `period`.
    ///
    /// Stops by itself once the receiving side is gone.
    ///
    /// # Errors
    ///
    /// [`TimerError::Spawn`] if the thread cannot be created.
    pub fn forward<E>(period: Duration, tx: Sender<E>, event: E) -> Result<Self, TimerError>
    where
        E: Clone + Send + 'static,
    {
        Self::start(period, move || match tx.send(event.clone()) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        })
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer thread is still alive.
    pub fn is_running(&self) -> bool {
        self.worker.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Instant;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tick;

    #[test]
    fn forward_delivers_ticks() {
        let (tx, rx) = mpsc::channel();
        let _timer = IdleTimer::forward(Duration::from_millis(5), tx, Tick).expect("start");

        for _ in 0..3 {
            assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(Tick));
        }
    }

    #[test]
    fn no_ticks_after_drop() {
        let (tx, rx) = mpsc::channel();
        let timer = IdleTimer::forward(Duration::from_millis(2), tx, Tick).expect("start");
        rx.recv_timeout(Duration::from_secs(5)).expect("first tick");

        drop(timer);
        while rx.try_recv().is_ok() {}

        std::thread::sleep(Duration::from_millis(20));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stops_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel();
        let timer = IdleTimer::forward(Duration::from_millis(1), tx, Tick).expect("start");
        drop(rx);

        let deadline = Instant::now() + Duration::from_secs(5);
        while timer.is_running() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(!timer.is_running());
    }

    #[test]
    fn drop_does_not_wait_for_period() {
        let timer = IdleTimer::start(Duration::from_secs(3600), || ControlFlow::Continue(()))
            .expect("start");
        assert_eq!(timer.period(), Duration::from_secs(3600));

        let started = Instant::now();
        drop(timer);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
