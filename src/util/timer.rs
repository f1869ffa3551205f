//! Deferred task scheduling.
//!
//! Toast auto-dismissal needs "run this after N seconds". The browser build
//! uses `gloo-timers`; native builds have no event loop, so scheduled tasks
//! are dropped there and tests substitute a manual clock.

use std::time::Duration;

/// A one-shot deferred task.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task);
}

/// `setTimeout`-backed scheduler for the running page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Convert a delay to the millisecond count `setTimeout` accepts.
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(timeout_millis(delay), task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no event loop; dropping task scheduled in {}ms", timeout_millis(delay));
            drop(task);
        }
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
