//! Cancelable timers.
//!
//! Components never spawn timers themselves; they ask a [`Scheduler`] for a
//! one-shot or repeating delivery of an [`AppMessage`] and keep the returned
//! [`TaskHandle`]. Dropping the handle cancels the timer, so replacing a
//! stored handle is enough to cancel the previous one.
//!
//! [`TokioScheduler`] backs the running app. [`ManualScheduler`] drives a
//! virtual clock for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use super::messages::AppMessage;

pub trait Scheduler {
    /// Deliver `message` every `period`, first delivery one period from now.
    fn every(&mut self, period: Duration, message: AppMessage) -> TaskHandle;

    /// Deliver `message` once after `delay`.
    fn after(&mut self, delay: Duration, message: AppMessage) -> TaskHandle;
}

/// Owner of a scheduled timer. Cancels on drop.
#[derive(Debug)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl TaskHandle {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawns one tokio task per timer, delivering into the app's message channel.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn every(&mut self, period: Duration, message: AppMessage) -> TaskHandle {
        let tx = self.tx.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if flag.load(Ordering::SeqCst) || tx.send(message.clone()).is_err() {
                    break;
                }
            }
        });
        TaskHandle::new(cancelled, Some(task.abort_handle()))
    }

    fn after(&mut self, delay: Duration, message: AppMessage) -> TaskHandle {
        let tx = self.tx.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !flag.load(Ordering::SeqCst) {
                let _ = tx.send(message);
            }
        });
        TaskHandle::new(cancelled, Some(task.abort_handle()))
    }
}

#[derive(Debug)]
struct ManualEntry {
    due: Duration,
    period: Option<Duration>,
    message: AppMessage,
    cancelled: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    entries: Vec<ManualEntry>,
}

/// Virtual-clock scheduler for tests.
///
/// Nothing fires on its own: [`ManualScheduler::advance`] moves the clock and
/// returns every message that came due, in due order. Clones share one clock,
/// so a test can hand a clone to the [`App`](crate::app::App) and keep
/// driving time through the original.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn clock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn now(&self) -> Duration {
        self.clock().now
    }

    /// Timers that are neither cancelled nor spent.
    pub fn pending(&self) -> usize {
        self.clock()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Advance the virtual clock by `by` and collect due messages.
    pub fn advance(&mut self, by: Duration) -> Vec<AppMessage> {
        let mut clock = self.clock();
        let target = clock.now + by;
        let mut fired = Vec::new();
        loop {
            clock
                .entries
                .retain(|entry| !entry.cancelled.load(Ordering::SeqCst));
            let next = clock
                .entries
                .iter_mut()
                .filter(|entry| entry.due <= target)
                .min_by_key(|entry| entry.due);
            let Some(entry) = next else { break };
            let due = entry.due;
            fired.push(entry.message.clone());
            match entry.period {
                Some(period) => entry.due += period,
                None => entry.cancelled.store(true, Ordering::SeqCst),
            }
            clock.now = due;
        }
        clock.now = target;
        fired
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, message: AppMessage) -> TaskHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut clock = self.clock();
        let due = clock.now + delay;
        clock.entries.push(ManualEntry {
            due,
            period,
            message,
            cancelled: Arc::clone(&cancelled),
        });
        TaskHandle::new(cancelled, None)
    }
}

impl Scheduler for ManualScheduler {
    fn every(&mut self, period: Duration, message: AppMessage) -> TaskHandle {
        self.push(period, Some(period), message)
    }

    fn after(&mut self, delay: Duration, message: AppMessage) -> TaskHandle {
        self.push(delay, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(generation: u64) -> AppMessage {
        AppMessage::RevealTick { generation }
    }

    #[test]
    fn test_manual_every_fires_per_period() {
        let mut scheduler = ManualScheduler::new();
        let _handle = scheduler.every(Duration::from_millis(25), tick(1));
        assert!(scheduler.advance(Duration::from_millis(24)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![tick(1)]);
        assert_eq!(scheduler.advance(Duration::from_millis(50)).len(), 2);
    }

    #[test]
    fn test_manual_after_fires_once() {
        let mut scheduler = ManualScheduler::new();
        let _handle = scheduler.after(Duration::from_millis(10), tick(2));
        assert_eq!(scheduler.advance(Duration::from_millis(100)), vec![tick(2)]);
        assert!(scheduler.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.every(Duration::from_millis(25), tick(3));
        assert_eq!(scheduler.pending(), 1);
        drop(handle);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_clones_share_the_clock() {
        let mut driver = ManualScheduler::new();
        let mut owner = driver.clone();
        let _handle = owner.after(Duration::from_millis(10), tick(4));
        assert_eq!(driver.pending(), 1);
        assert_eq!(driver.advance(Duration::from_millis(10)), vec![tick(4)]);
        assert_eq!(owner.now(), Duration::from_millis(10));
    }

    #[test]
    fn test_messages_come_out_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let _slow = scheduler.after(Duration::from_millis(30), tick(30));
        let _fast = scheduler.after(Duration::from_millis(10), tick(10));
        assert_eq!(
            scheduler.advance(Duration::from_millis(50)),
            vec![tick(10), tick(30)]
        );
    }

    #[tokio::test]
    async fn test_tokio_after_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let _handle = scheduler.after(Duration::from_millis(1), tick(7));
        assert_eq!(rx.recv().await, Some(tick(7)));
    }

    #[tokio::test]
    async fn test_tokio_cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let mut handle = scheduler.after(Duration::from_millis(20), tick(8));
        handle.cancel();
        assert!(handle.is_cancelled());
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(rx.try_recv().is_err());
    }
}
