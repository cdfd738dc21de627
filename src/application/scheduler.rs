use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Cancels a repeating timer. Cancelling twice is a no-op.
pub trait TimerHandle {
    fn cancel(&mut self);
    fn is_active(&self) -> bool;
}

/// Source of repeating ticks. The browser build uses `gloo_timers`, tests
/// drive a [`ManualScheduler`].
pub trait TickScheduler {
    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle>;
}

struct ManualTimer {
    period: Duration,
    next_due: Duration,
    active: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnMut()>>,
}

/// Virtual clock. Nothing fires until [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    timers: Rc<RefCell<Vec<ManualTimer>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn active_timers(&self) -> usize {
        self.timers.borrow().iter().filter(|timer| timer.active.get()).count()
    }

    /// Moves the clock forward, firing every due timer in deadline order.
    /// Timers due at the same instant fire in registration order.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut fired = 0;
        while let Some(index) = self.next_due(target) {
            let (due, callback) = {
                let mut timers = self.timers.borrow_mut();
                let timer = &mut timers[index];
                let due = timer.next_due;
                timer.next_due += timer.period;
                (due, timer.callback.take())
            };
            self.now.set(due);
            if let Some(mut callback) = callback {
                callback();
                fired += 1;
                if let Some(timer) = self.timers.borrow_mut().get_mut(index) {
                    timer.callback = Some(callback);
                }
            }
        }
        self.now.set(target);
        self.timers.borrow_mut().retain(|timer| timer.active.get());
        fired
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.timers
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.active.get() && timer.next_due <= target)
            .min_by_key(|(index, timer)| (timer.next_due, *index))
            .map(|(index, _)| index)
    }
}

impl TickScheduler for ManualScheduler {
    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        let active = Rc::new(Cell::new(true));
        let period = period.max(Duration::from_millis(1));
        self.timers.borrow_mut().push(ManualTimer {
            period,
            next_due: self.now.get() + period,
            active: active.clone(),
            callback: Some(callback),
        });
        Box::new(ManualTimerHandle { active })
    }
}

struct ManualTimerHandle {
    active: Rc<Cell<bool>>,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(&mut self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let fast = log.clone();
        let _a = scheduler.every(Duration::from_secs(2), Box::new(move || fast.borrow_mut().push("live")));
        let slow = log.clone();
        let _b = scheduler.every(Duration::from_secs(4), Box::new(move || slow.borrow_mut().push("reveal")));

        assert_eq!(scheduler.advance(Duration::from_secs(4)), 3);
        assert_eq!(*log.borrow(), vec!["live", "live", "reveal"]);
        assert_eq!(scheduler.now(), Duration::from_secs(4));
    }

    #[test]
    fn cancelled_timer_stops_firing() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut handle = scheduler.every(Duration::from_secs(1), Box::new(move || c.set(c.get() + 1)));
        scheduler.advance(Duration::from_secs(2));
        handle.cancel();
        handle.cancel();
        scheduler.advance(Duration::from_secs(5));
        assert_eq!(count.get(), 2);
        assert!(!handle.is_active());
        assert_eq!(scheduler.active_timers(), 0);
    }
}
