use crate::domain::feed::Sample;
use crate::domain::state::Frame;

/// What happened to the window, in the order it was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    SampleAppended { sample: Sample, evicted: Option<Sample> },
    /// A live tick arrived while the seed was still being revealed.
    LiveTickDiscarded,
    RevealStarted,
    RevealAdvanced { index: usize },
    RevealCompleted,
    SessionClosed,
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_feed_event(&self, event: FeedEvent);
    fn publish_frame(&self, frame: &Frame);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    feed_handlers: Vec<Box<dyn Fn(&FeedEvent)>>,
    frame_handlers: Vec<Box<dyn Fn(&Frame)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_feed_events<F>(&mut self, handler: F)
    where
        F: Fn(&FeedEvent) + 'static,
    {
        self.feed_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_frames<F>(&mut self, handler: F)
    where
        F: Fn(&Frame) + 'static,
    {
        self.frame_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_feed_event(&self, event: FeedEvent) {
        for handler in &self.feed_handlers {
            handler(&event);
        }
    }

    fn publish_frame(&self, frame: &Frame) {
        for handler in &self.frame_handlers {
            handler(frame);
        }
    }
}
