//! Browser [`Scheduler`] backed by `setInterval`/`setTimeout`, plus hooks
//! that tie a timer's lifetime to a component.
//!
//! Timer callbacks fire outside the Dioxus runtime, so the hooks forward
//! each tick over a channel to a task spawned in the component's scope and
//! only that task touches signals.

use cropwise_core::schedule::{Scheduler, TimerHandle};
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

/// `window.setInterval` / `window.setTimeout` scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_repeating(&self, period: Duration, mut callback: Box<dyn FnMut()>) -> TimerHandle {
        let active = Rc::new(Cell::new(true));
        let interval = Interval::new(millis(period), move || callback());
        TimerHandle::new(active, Some(Box::new(move || drop(interval))))
    }

    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let active = Rc::new(Cell::new(true));
        let fired = active.clone();
        let timeout = Timeout::new(millis(delay), move || {
            fired.set(false);
            callback();
        });
        TimerHandle::new(active, Some(Box::new(move || drop(timeout))))
    }
}

/// Wait `duration` on the browser clock.
pub async fn sleep(duration: Duration) {
    cropwise_core::schedule::delay(&BrowserScheduler, duration).await;
}

/// Run `on_tick` every `period` while the calling component is mounted.
pub fn use_interval(period: Duration, on_tick: impl FnMut() + 'static) {
    let handle = use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<()>();
        let handle = BrowserScheduler.schedule_repeating(
            period,
            Box::new(move || {
                let _ = tx.unbounded_send(());
            }),
        );
        let mut on_tick = on_tick;
        spawn(async move {
            while rx.next().await.is_some() {
                on_tick();
            }
        });
        Rc::new(RefCell::new(handle))
    });

    use_drop(move || {
        handle.borrow_mut().cancel();
        log::debug!("[CropWise] timers: interval cancelled on teardown");
    });
}
