use crate::application::engine::FeedEngine;
use crate::domain::{feed::RevealPhase, logging::LogComponent};
use crate::{log_debug, log_info};
use futures::{
    StreamExt,
    channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded},
};

/// One change to the feed. Timers and callers only ever enqueue these; the
/// engine applies them one at a time, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Publish the current state without changing it.
    Refresh,
    StartReveal,
    RevealTick,
    LiveTick,
    Shutdown,
}

/// Producer side of the queue. Cheap to clone into timer callbacks.
#[derive(Debug, Clone)]
pub struct MutationSender {
    tx: UnboundedSender<Mutation>,
}

impl MutationSender {
    /// Returns `false` once the queue is closed.
    pub fn enqueue(&self, mutation: Mutation) -> bool {
        self.tx.unbounded_send(mutation).is_ok()
    }

    pub fn close(&self) {
        self.tx.close_channel();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

pub type MutationReceiver = UnboundedReceiver<Mutation>;

pub fn mutation_queue() -> (MutationSender, MutationReceiver) {
    let (tx, rx) = unbounded::<Mutation>();
    (MutationSender { tx }, rx)
}

/// Engine actor: publishes the initial frame, then drains the queue until
/// `Shutdown` arrives or every sender is gone. The engine is dropped on exit.
///
/// A reveal that has not started yet shows nothing, so its first frame comes
/// from `StartReveal` instead.
pub async fn run_engine(mut engine: FeedEngine, mut rx: MutationReceiver) {
    let component = LogComponent::Application("MutationQueue");
    if engine.phase() != RevealPhase::Idle {
        engine.apply(Mutation::Refresh);
    }
    while let Some(mutation) = rx.next().await {
        log_debug!(component.clone(), "Applying {:?}", mutation);
        engine.apply(mutation);
        if mutation == Mutation::Shutdown {
            rx.close();
            break;
        }
    }
    log_info!(component, "🏁 Mutation queue drained after {} frames", engine.sequence());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{EngineConfig, EngineVariant};
    use crate::domain::feed::SampleGenerator;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn mutations_apply_in_order() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let mut engine = FeedEngine::new(EngineConfig::default())
            .unwrap()
            .with_generator(SampleGenerator::seeded(3));
        engine.subscribe_to_frames(move |frame| sink.borrow_mut().push(frame.window.len()));

        let (tx, rx) = mutation_queue();
        assert!(tx.enqueue(Mutation::LiveTick));
        assert!(tx.enqueue(Mutation::LiveTick));
        assert!(tx.enqueue(Mutation::Shutdown));
        assert!(tx.enqueue(Mutation::LiveTick));
        futures::executor::block_on(run_engine(engine, rx));

        assert_eq!(*frames.borrow(), vec![6, 7, 8]);
        assert!(!tx.enqueue(Mutation::LiveTick));
    }

    #[test]
    fn pending_reveal_starts_without_an_empty_frame() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let mut engine =
            FeedEngine::new(EngineConfig::default().with_variant(EngineVariant::Reveal)).unwrap();
        engine.subscribe_to_frames(move |frame| {
            sink.borrow_mut().push((frame.sequence, frame.phase, frame.window.len()))
        });

        let (tx, rx) = mutation_queue();
        assert!(tx.enqueue(Mutation::StartReveal));
        assert!(tx.enqueue(Mutation::Shutdown));
        futures::executor::block_on(run_engine(engine, rx));

        assert_eq!(*frames.borrow(), vec![(1, RevealPhase::Revealing(0), 1)]);
    }
}
