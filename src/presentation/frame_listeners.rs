use crate::domain::state::Frame;
use std::cell::RefCell;

/// Frame callbacks registered by the embedder, plus the last frame they saw.
///
/// Callbacks run against a snapshot of the list, so a callback may register
/// another one or read [`FrameListeners::latest`] without re-entrancy panics.
pub struct FrameListeners<L> {
    latest: RefCell<Option<Frame>>,
    listeners: RefCell<Vec<L>>,
}

impl<L: Clone> FrameListeners<L> {
    pub fn new() -> Self {
        Self { latest: RefCell::new(None), listeners: RefCell::new(Vec::new()) }
    }

    pub fn subscribe(&self, listener: L) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn latest(&self) -> Option<Frame> {
        self.latest.borrow().clone()
    }

    /// Record `frame` as the latest one, then hand it to every listener
    /// registered before this call.
    pub fn publish<F>(&self, frame: &Frame, mut call: F)
    where
        F: FnMut(&L, &Frame),
    {
        *self.latest.borrow_mut() = Some(frame.clone());
        let snapshot = self.listeners.borrow().clone();
        for listener in &snapshot {
            call(listener, frame);
        }
    }
}

impl<L: Clone> Default for FrameListeners<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{FeedEngine, Mutation};
    use crate::domain::config::EngineConfig;
    use crate::domain::feed::{Label, SampleGenerator};
    use std::rc::Rc;

    type Callback = Rc<dyn Fn(&Frame)>;

    fn frames(count: usize) -> Vec<Frame> {
        let mut engine = FeedEngine::new(EngineConfig::default())
            .unwrap()
            .with_generator(SampleGenerator::seeded(11))
            .with_labels(|| Label::from("now"));
        (0..count).filter_map(|_| engine.apply(Mutation::LiveTick)).collect()
    }

    #[test]
    fn callback_sees_the_frame_it_is_handed_as_latest() {
        let registry: Rc<FrameListeners<Callback>> = Rc::new(FrameListeners::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (inner, sink) = (registry.clone(), seen.clone());
        registry.subscribe(Rc::new(move |frame: &Frame| {
            let latest = inner.latest().map(|latest| latest.sequence);
            sink.borrow_mut().push((frame.sequence, latest));
        }));

        for frame in frames(2) {
            registry.publish(&frame, |listener, frame| listener(frame));
        }
        assert_eq!(*seen.borrow(), vec![(1, Some(1)), (2, Some(2))]);
    }

    #[test]
    fn callback_may_register_another_listener() {
        let registry: Rc<FrameListeners<Callback>> = Rc::new(FrameListeners::new());
        let late_calls = Rc::new(RefCell::new(Vec::new()));

        let (inner, sink) = (registry.clone(), late_calls.clone());
        registry.subscribe(Rc::new(move |frame: &Frame| {
            if frame.sequence == 1 {
                let sink = sink.clone();
                inner.subscribe(Rc::new(move |frame: &Frame| sink.borrow_mut().push(frame.sequence)));
            }
        }));

        for frame in frames(3) {
            registry.publish(&frame, |listener, frame| listener(frame));
        }
        assert_eq!(registry.len(), 2);
        // Registered during frame 1, so first called with frame 2.
        assert_eq!(*late_calls.borrow(), vec![2, 3]);
    }
}
