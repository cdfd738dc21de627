use crate::application::mutation_queue::Mutation;
use crate::domain::{
    chart::{
        AnnotationTarget, ChartOptions, OverlayRenderer, OverlayStyle, RenderStyle, SurfaceSize,
        TextMeasurer, Viewport,
    },
    config::{EngineConfig, EngineVariant},
    errors::ConfigResult,
    events::{EventDispatcher, FeedEvent, InMemoryEventDispatcher},
    feed::{Label, Metrics, RevealPhase, RevealSequencer, Sample, SampleGenerator, Window},
    logging::{LogComponent, get_time_provider},
    state::Frame,
};
use crate::infrastructure::text_metrics::ApproxTextMeasurer;
use crate::{log_debug, log_info};

const COMPONENT: LogComponent = LogComponent::Application("FeedEngine");

type LabelSource = Box<dyn FnMut() -> Label>;

/// Wall-clock label of the moment a live tick is applied.
fn clock_label() -> Label {
    let clock = get_time_provider();
    Label::new(clock.clock_label(clock.current_timestamp()))
}

/// Sole owner of the window and the reveal state.
///
/// Every change goes through [`FeedEngine::apply`]; each applied mutation
/// recomputes metrics, overlay and render options from scratch and publishes
/// one [`Frame`].
pub struct FeedEngine {
    config: EngineConfig,
    window: Window,
    reveal: RevealSequencer,
    generator: SampleGenerator,
    labels: LabelSource,
    measurer: Box<dyn TextMeasurer>,
    targets: Vec<AnnotationTarget>,
    overlay_style: OverlayStyle,
    render_style: RenderStyle,
    surface: SurfaceSize,
    dispatcher: InMemoryEventDispatcher,
    sequence: u64,
    closed: bool,
}

impl FeedEngine {
    /// Validates the config and seeds the window.
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        let seed_len = config.seed.len();
        let reveal = match config.variant {
            EngineVariant::Live => RevealSequencer::finished(seed_len),
            EngineVariant::Reveal => RevealSequencer::new(seed_len),
        };
        log_info!(
            COMPONENT,
            "🏗️ Engine ready: {} seed samples, capacity {}, variant {}",
            seed_len,
            config.capacity,
            config.variant
        );
        Ok(Self {
            window: config.seed_window(),
            reveal,
            generator: SampleGenerator::from_entropy(),
            labels: Box::new(clock_label),
            measurer: Box::new(ApproxTextMeasurer),
            targets: AnnotationTarget::defaults(),
            overlay_style: config.overlay_style(),
            render_style: config.render_style(),
            surface: config.surface(),
            dispatcher: InMemoryEventDispatcher::new(),
            sequence: 0,
            closed: false,
            config,
        })
    }

    pub fn with_generator(mut self, generator: SampleGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Replace the wall-clock labels of live samples.
    pub fn with_labels<F>(mut self, labels: F) -> Self
    where
        F: FnMut() -> Label + 'static,
    {
        self.labels = Box::new(labels);
        self
    }

    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn with_targets(mut self, targets: Vec<AnnotationTarget>) -> Self {
        self.targets = targets;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn subscribe_to_feed_events<F>(&mut self, handler: F)
    where
        F: Fn(&FeedEvent) + 'static,
    {
        self.dispatcher.subscribe_to_feed_events(handler);
    }

    pub fn subscribe_to_frames<F>(&mut self, handler: F)
    where
        F: Fn(&Frame) + 'static,
    {
        self.dispatcher.subscribe_to_frames(handler);
    }

    /// Apply one mutation. Returns the published frame, or `None` when the
    /// mutation left the visible state untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Option<Frame> {
        if self.closed {
            log_debug!(COMPONENT, "Ignoring {:?} after shutdown", mutation);
            return None;
        }
        let changed = match mutation {
            Mutation::StartReveal => self.start_reveal(),
            Mutation::RevealTick => self.reveal_tick(),
            Mutation::LiveTick => self.live_tick(),
            Mutation::Refresh => true,
            Mutation::Shutdown => {
                self.closed = true;
                self.dispatcher.publish_feed_event(FeedEvent::SessionClosed);
                log_info!(COMPONENT, "🛑 Engine closed after {} frames", self.sequence);
                false
            }
        };
        changed.then(|| self.publish())
    }

    fn start_reveal(&mut self) -> bool {
        if !self.reveal.start() {
            return false;
        }
        log_info!(COMPONENT, "🎬 Reveal started over {} seed samples", self.config.seed.len());
        self.dispatcher.publish_feed_event(FeedEvent::RevealStarted);
        if self.reveal.is_done() {
            self.dispatcher.publish_feed_event(FeedEvent::RevealCompleted);
        }
        true
    }

    fn reveal_tick(&mut self) -> bool {
        if !self.reveal.is_revealing() {
            return false;
        }
        match self.reveal.advance() {
            RevealPhase::Revealing(index) => {
                self.dispatcher.publish_feed_event(FeedEvent::RevealAdvanced { index });
            }
            _ => {
                log_info!(COMPONENT, "✅ Reveal completed, live ticks take over");
                self.dispatcher.publish_feed_event(FeedEvent::RevealCompleted);
            }
        }
        true
    }

    fn live_tick(&mut self) -> bool {
        if !self.reveal.is_done() {
            log_debug!(COMPONENT, "⏭️ Live tick discarded during {:?}", self.reveal.phase());
            self.dispatcher.publish_feed_event(FeedEvent::LiveTickDiscarded);
            return false;
        }
        let previous = self.window.latest().map(Sample::value).unwrap_or_default();
        let sample = Sample::new((self.labels)(), self.generator.next(previous));
        let evicted = self.window.append(sample.clone());
        log_debug!(
            COMPONENT,
            "📈 {} = {:.2} (evicted {:?})",
            sample.label(),
            sample.value(),
            evicted.as_ref().map(Sample::label)
        );
        self.dispatcher.publish_feed_event(FeedEvent::SampleAppended { sample, evicted });
        true
    }

    fn publish(&mut self) -> Frame {
        self.sequence += 1;
        let frame = self.compose();
        self.dispatcher.publish_frame(&frame);
        frame
    }

    /// The window as currently shown: the revealed prefix while revealing.
    pub fn visible_window(&self) -> Window {
        match self.reveal.visible_len() {
            Some(len) => self.window.truncated(len),
            None => self.window.clone(),
        }
    }

    /// Derive a frame from the current state without publishing it.
    /// Calling it twice in a row yields equal frames.
    pub fn compose(&self) -> Frame {
        let visible = self.visible_window();
        let metrics = Metrics::recompute(&visible);
        let viewport = Viewport::fit(&visible, self.surface);
        let overlay =
            OverlayRenderer::new(&viewport, self.measurer.as_ref(), self.surface, &self.overlay_style)
                .render(&visible, &self.targets);
        let price_color = match metrics {
            Some(metrics) => self.overlay_style.color_for(metrics.direction).to_string(),
            None => self.overlay_style.up_color.clone(),
        };
        Frame {
            sequence: self.sequence,
            phase: self.reveal.phase(),
            window: visible.samples(),
            metrics,
            price_color,
            overlay,
            options: ChartOptions::build(&visible, &self.render_style),
        }
    }
}

impl std::fmt::Debug for FeedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedEngine")
            .field("window", &self.window)
            .field("phase", &self.reveal.phase())
            .field("sequence", &self.sequence)
            .field("closed", &self.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(variant: EngineVariant) -> FeedEngine {
        FeedEngine::new(EngineConfig::default().with_variant(variant))
            .unwrap()
            .with_generator(SampleGenerator::seeded(7))
            .with_labels(|| Label::from("now"))
    }

    #[test]
    fn live_tick_appends_one_sample() {
        let mut engine = engine(EngineVariant::Live);
        let frame = engine.apply(Mutation::LiveTick).unwrap();
        assert_eq!(frame.sequence, 1);
        assert_eq!(frame.window.len(), 7);
        assert_eq!(frame.window.last().unwrap().label().value(), "now");
        let delta = frame.latest_value().unwrap() - 3444.0;
        assert!((-1.0..1.0).contains(&delta));
    }

    #[test]
    fn shutdown_stops_further_mutations() {
        let mut engine = engine(EngineVariant::Live);
        assert!(engine.apply(Mutation::Shutdown).is_none());
        assert!(engine.apply(Mutation::LiveTick).is_none());
        assert_eq!(engine.window().len(), 6);
        assert!(engine.is_closed());
    }

    #[test]
    fn compose_is_idempotent() {
        let mut engine = engine(EngineVariant::Live);
        engine.apply(Mutation::LiveTick);
        assert_eq!(engine.compose(), engine.compose());
    }
}
