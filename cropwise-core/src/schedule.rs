//! Scheduled callbacks with cancellation.
//!
//! Views never touch `setInterval`/`setTimeout` directly; they go through a
//! [`Scheduler`] and keep the returned [`TimerHandle`] for as long as the
//! timer should run. Dropping the handle cancels the timer, so a view that
//! stores its handle in component state stops its timers on teardown.
//!
//! [`ManualScheduler`] drives timers from a virtual clock for tests and the
//! CLI; the browser implementation lives in the UI crate.

use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub trait Scheduler {
    /// Run `callback` every `period` until the handle is cancelled.
    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerHandle;

    /// Run `callback` once after `delay` unless cancelled first.
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owner of a scheduled timer. Cancels it on drop.
pub struct TimerHandle {
    active: Rc<Cell<bool>>,
    on_cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// `active` is shared with the backend; `on_cancel` releases its resources.
    pub fn new(active: Rc<Cell<bool>>, on_cancel: Option<Box<dyn FnOnce()>>) -> Self {
        Self { active, on_cancel }
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.active.set(false);
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
    }

    /// `false` once cancelled, or once a one-shot timer has fired.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.active.get())
            .finish()
    }
}

/// Resolve after `duration` on `scheduler`.
///
/// The timer belongs to the returned future: dropping the future before it
/// resolves cancels the timer.
pub async fn delay<S: Scheduler + ?Sized>(scheduler: &S, duration: Duration) {
    let (tx, rx) = oneshot::channel();
    let _handle = scheduler.schedule_once(
        duration,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    let _ = rx.await;
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeating(Box<dyn FnMut()>, Duration),
}

struct Pending {
    due: Duration,
    seq: u64,
    active: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler. Nothing fires until [`advance`](Self::advance).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .pending
            .iter()
            .filter(|p| p.active.get())
            .count()
    }

    fn push(&self, delay: Duration, task: Task) -> TimerHandle {
        let active = Rc::new(Cell::new(true));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.pending.push(Pending {
            due,
            seq,
            active: active.clone(),
            task,
        });
        TimerHandle::new(active, None)
    }

    /// Move the clock forward, firing every due timer in order. Returns the
    /// number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.pending.retain(|p| p.active.get());
                let idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);
                idx.map(|idx| {
                    let pending = clock.pending.remove(idx);
                    clock.now = pending.due;
                    pending
                })
            };
            let Some(pending) = next else { break };
            fired += 1;

            // The clock is not borrowed here, so callbacks may schedule more work.
            match pending.task {
                Task::Once(callback) => {
                    pending.active.set(false);
                    callback();
                }
                Task::Repeating(mut callback, period) => {
                    callback();
                    if pending.active.get() {
                        let mut clock = self.clock.borrow_mut();
                        let seq = clock.next_seq;
                        clock.next_seq += 1;
                        clock.pending.push(Pending {
                            due: pending.due + period,
                            seq,
                            active: pending.active,
                            task: Task::Repeating(callback, period),
                        });
                    }
                }
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Task::Repeating(callback, period))
    }

    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.push(delay, Task::Once(callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLOCK_PERIOD, LOGIN_LATENCY, REGISTER_LATENCY};
    use futures::FutureExt;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        (count, move || sink.set(sink.get() + 1))
    }

    #[test]
    fn repeating_timer_fires_each_period() {
        let scheduler = ManualScheduler::new();
        let (count, tick) = counter();
        let handle = scheduler.schedule_repeating(CLOCK_PERIOD, Box::new(tick));

        scheduler.advance(Duration::from_secs(59));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(count.get(), 1);
        scheduler.advance(Duration::from_secs(180));
        assert_eq!(count.get(), 4);
        assert!(handle.is_active());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (count, tick) = counter();
        let handle = scheduler.schedule_repeating(CLOCK_PERIOD, Box::new(tick));
        drop(handle);
        scheduler.advance(Duration::from_secs(600));
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn one_shot_fires_once_and_deactivates() {
        let scheduler = ManualScheduler::new();
        let (count, mut tick) = counter();
        let handle = scheduler.schedule_once(LOGIN_LATENCY, Box::new(move || tick()));
        assert_eq!(scheduler.advance(Duration::from_millis(999)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(count.get(), 1);
        assert!(!handle.is_active());
    }

    #[test]
    fn cancel_before_due_prevents_firing() {
        let scheduler = ManualScheduler::new();
        let (count, mut tick) = counter();
        let mut handle = scheduler.schedule_once(LOGIN_LATENCY, Box::new(move || tick()));
        handle.cancel();
        handle.cancel();
        scheduler.advance(Duration::from_secs(2));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn callbacks_may_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let (count, mut tick) = counter();
        let inner = scheduler.clone();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::default();
        let keep = slot.clone();
        let _outer = scheduler.schedule_once(
            Duration::from_millis(10),
            Box::new(move || {
                let handle = inner.schedule_once(Duration::from_millis(10), Box::new(move || tick()));
                *keep.borrow_mut() = Some(handle);
            }),
        );
        scheduler.advance(Duration::from_millis(20));
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(20));
    }

    #[test]
    fn delay_resolves_after_the_latency() {
        let scheduler = ManualScheduler::new();
        let mut wait = Box::pin(delay(&scheduler, REGISTER_LATENCY));
        assert!(wait.as_mut().now_or_never().is_none());
        scheduler.advance(Duration::from_millis(1499));
        assert!(wait.as_mut().now_or_never().is_none());
        scheduler.advance(Duration::from_millis(1));
        assert!(wait.as_mut().now_or_never().is_some());
    }

    #[test]
    fn dropping_a_delay_cancels_its_timer() {
        let scheduler = ManualScheduler::new();
        let mut wait = Box::pin(delay(&scheduler, LOGIN_LATENCY));
        assert!(wait.as_mut().now_or_never().is_none());
        assert_eq!(scheduler.pending(), 1);
        drop(wait);
        assert_eq!(scheduler.pending(), 0);
    }
}
