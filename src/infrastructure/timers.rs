//! Browser timer and executor adapters.

use crate::application::scheduler::{TickScheduler, TimerHandle};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};
use gloo_timers::callback::Interval;
use std::time::Duration;

/// Repeating ticks on `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl TickScheduler for GlooScheduler {
    fn every(&self, period: Duration, mut callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1);
        log_debug!(LogComponent::Infrastructure("GlooScheduler"), "⏱️ Interval every {}ms", millis);
        Box::new(GlooTimer { interval: Some(Interval::new(millis, move || callback())) })
    }
}

struct GlooTimer {
    interval: Option<Interval>,
}

impl TimerHandle for GlooTimer {
    fn cancel(&mut self) {
        // Dropping the interval clears it.
        self.interval.take();
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

/// Spawns onto the browser microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
