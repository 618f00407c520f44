use crate::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tokio::time::Interval;
use tokio::time::MissedTickBehavior;

/// Configuration for round pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub tick: Duration,
    pub notice: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick: TICK_INTERVAL,
            notice: NOTICE_DELAY,
        }
    }
}

/// Repeating countdown pulse. Lives only while a session is playing;
/// the first pulse lands one full period after start.
#[derive(Debug)]
pub struct Ticker(Interval);

impl Ticker {
    pub fn start(period: Duration) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self(interval)
    }
    pub async fn pulse(&mut self) {
        self.0.tick().await;
    }
}

/// Wait for the next pulse, or forever when no ticker is running.
pub async fn pulse(ticker: &mut Option<Ticker>) {
    match ticker {
        Some(ticker) => ticker.pulse().await,
        None => std::future::pending().await,
    }
}

/// Delayed one-shot round-ended announcement.
/// Dropping the notice aborts the pending send.
#[derive(Debug)]
pub struct Notice(tokio::task::JoinHandle<()>);

impl Notice {
    pub fn schedule<T>(delay: Duration, message: T, tx: UnboundedSender<T>) -> Self
    where
        T: Send + 'static,
    {
        Self(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message);
        }))
    }
}

impl Drop for Notice {
    fn drop(&mut self) {
        self.0.abort();
    }
}
