//! Per-question countdown driver
//!
//! A [`Countdown`] is a background task that emits one tick per period on a
//! channel. The owning [`CountdownHandle`] cancels the task when dropped, so
//! leaving the `AwaitingAnswer` phase is just a matter of dropping the handle.

use std::future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Tick period used for the question timer
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Starts countdown tasks
pub struct Countdown;

impl Countdown {
    /// Spawn a ticking task with the standard one-second period
    pub fn start() -> CountdownHandle {
        Self::with_period(TICK_PERIOD)
    }

    /// Spawn a ticking task; the first tick arrives one `period` from now
    pub fn with_period(period: Duration) -> CountdownHandle {
        let (tx, rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(()).await.is_err() {
                            break;
                        }
                    }
                }
            }
            trace!("Countdown task stopped");
        });

        CountdownHandle { rx, cancel }
    }
}

/// Owner of a running countdown; dropping it stops the task
pub struct CountdownHandle {
    rx: mpsc::Receiver<()>,
    cancel: CancellationToken,
}

impl CountdownHandle {
    /// Wait for the next tick; `None` once cancelled
    pub async fn tick(&mut self) -> Option<()> {
        if self.cancel.is_cancelled() {
            return None;
        }
        tokio::select! {
            _ = self.cancel.cancelled() => None,
            tick = self.rx.recv() => tick,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Token observed by the background task
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Next tick of an optional countdown; pends forever when there is none
///
/// Lets an event loop keep a `select!` arm for the timer in every phase.
pub async fn next_tick(countdown: &mut Option<CountdownHandle>) -> Option<()> {
    match countdown {
        Some(handle) => handle.tick().await,
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let start = Instant::now();
        let mut countdown = Countdown::start();
        for expected in 1..=3u64 {
            assert_eq!(countdown.tick().await, Some(()));
            assert_eq!(start.elapsed(), Duration::from_secs(expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_period() {
        let mut countdown = Countdown::start();
        let early = tokio::time::timeout(Duration::from_millis(900), countdown.tick()).await;
        assert!(early.is_err());
        assert_eq!(countdown.tick().await, Some(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let mut countdown = Countdown::start();
        assert_eq!(countdown.tick().await, Some(()));
        countdown.cancel();
        assert!(countdown.is_cancelled());
        assert_eq!(countdown.tick().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let countdown = Countdown::start();
        let token = countdown.token();
        assert!(!token.is_cancelled());
        drop(countdown);
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_tick_without_countdown_pends() {
        let mut none: Option<CountdownHandle> = None;
        let result = tokio::time::timeout(Duration::from_secs(5), next_tick(&mut none)).await;
        assert!(result.is_err());

        let mut some = Some(Countdown::start());
        assert_eq!(next_tick(&mut some).await, Some(()));
    }
}
