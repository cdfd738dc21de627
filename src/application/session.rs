use crate::application::{
    engine::FeedEngine,
    mutation_queue::{Mutation, MutationSender, mutation_queue, run_engine},
    scheduler::{TickScheduler, TimerHandle},
};
use crate::domain::{
    config::EngineVariant,
    errors::{AppError, SessionResult},
    events::FeedEvent,
    logging::LogComponent,
};
use crate::{log_info, log_warn};
use futures::future::{AbortHandle, Abortable};
use futures::task::{LocalSpawn, LocalSpawnExt};
use std::cell::RefCell;
use std::rc::Rc;

const COMPONENT: LogComponent = LogComponent::Application("FeedSession");

type TimerSlot = Rc<RefCell<Option<Box<dyn TimerHandle>>>>;

fn cancel_slot(slot: &TimerSlot) {
    if let Some(mut timer) = slot.borrow_mut().take() {
        timer.cancel();
    }
}

/// A running feed: the engine actor plus the timers feeding it.
///
/// Teardown order is fixed: timers are cancelled first, then the queue is
/// closed, and only then is the actor (and with it the window) released.
pub struct FeedSession {
    sender: MutationSender,
    live_timer: TimerSlot,
    reveal_timer: TimerSlot,
    actor: AbortHandle,
    closed: bool,
}

impl FeedSession {
    /// Spawns the engine actor and arms the timers its variant needs.
    pub fn start<S>(
        mut engine: FeedEngine,
        scheduler: &dyn TickScheduler,
        spawner: &S,
    ) -> SessionResult<Self>
    where
        S: LocalSpawn + ?Sized,
    {
        let config = engine.config().clone();
        let reveal_timer: TimerSlot = Rc::new(RefCell::new(None));

        // The reveal timer has nothing left to do once the seed is visible.
        let slot = reveal_timer.clone();
        engine.subscribe_to_feed_events(move |event| {
            if *event == FeedEvent::RevealCompleted {
                cancel_slot(&slot);
            }
        });

        let (sender, receiver) = mutation_queue();
        let (actor, registration) = AbortHandle::new_pair();
        spawner
            .spawn_local(async move {
                let _ = Abortable::new(run_engine(engine, receiver), registration).await;
            })
            .map_err(|e| AppError::SessionError(format!("failed to spawn engine: {e}")))?;

        if config.variant == EngineVariant::Reveal {
            sender.enqueue(Mutation::StartReveal);
            let tx = sender.clone();
            let handle = scheduler.every(
                config.reveal_interval(),
                Box::new(move || {
                    tx.enqueue(Mutation::RevealTick);
                }),
            );
            *reveal_timer.borrow_mut() = Some(handle);
        }

        let tx = sender.clone();
        let live_timer = scheduler.every(
            config.live_interval(),
            Box::new(move || {
                tx.enqueue(Mutation::LiveTick);
            }),
        );

        log_info!(
            COMPONENT,
            "▶️ Session started: live every {:?}, variant {}",
            config.live_interval(),
            config.variant
        );

        Ok(Self {
            sender,
            live_timer: Rc::new(RefCell::new(Some(live_timer))),
            reveal_timer,
            actor,
            closed: false,
        })
    }

    /// Enqueue a live tick outside the timer cadence.
    pub fn tick(&self) -> SessionResult<()> {
        self.enqueue(Mutation::LiveTick)
    }

    /// Ask the engine to publish its current state again.
    pub fn refresh(&self) -> SessionResult<()> {
        self.enqueue(Mutation::Refresh)
    }

    fn enqueue(&self, mutation: Mutation) -> SessionResult<()> {
        if self.closed || !self.sender.enqueue(mutation) {
            return Err(AppError::SessionError("session is closed".to_string()));
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn timers_active(&self) -> usize {
        [&self.live_timer, &self.reveal_timer]
            .into_iter()
            .filter(|slot| slot.borrow().as_ref().is_some_and(|timer| timer.is_active()))
            .count()
    }

    /// Graceful teardown. Mutations already queued are still applied before
    /// the engine sees `Shutdown`. Calling it twice is a no-op.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        cancel_slot(&self.live_timer);
        cancel_slot(&self.reveal_timer);
        if !self.sender.enqueue(Mutation::Shutdown) {
            log_warn!(COMPONENT, "⚠️ Engine already gone at shutdown");
        }
        self.sender.close();
        log_info!(COMPONENT, "⏹️ Session shut down");
    }
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        let was_running = !self.closed;
        self.shutdown();
        if was_running {
            // Nobody will drive the queue to completion for a dropped session.
            self.actor.abort();
        }
    }
}

impl std::fmt::Debug for FeedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSession")
            .field("closed", &self.closed)
            .field("timers_active", &self.timers_active())
            .finish()
    }
}
