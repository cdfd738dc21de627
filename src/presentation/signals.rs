use crate::domain::chart::DrawPrimitive;
use crate::domain::feed::{Metrics, RevealPhase, Sample};
use crate::domain::state::Frame;
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive copy of the latest frame for a Leptos UI shell.
///
/// Written only from the frame subscription; components just read.
#[derive(Clone, Copy)]
pub struct FrameSignals {
    pub window: RwSignal<Vec<Sample>>,
    pub metrics: RwSignal<Option<Metrics>>,
    pub overlay: RwSignal<Vec<DrawPrimitive>>,
    pub price_color: RwSignal<String>,
    pub phase: RwSignal<RevealPhase>,
    pub frame_count: RwSignal<u64>,
}

impl FrameSignals {
    pub fn new() -> Self {
        Self {
            window: create_rw_signal(Vec::new()),
            metrics: create_rw_signal(None),
            overlay: create_rw_signal(Vec::new()),
            price_color: create_rw_signal("#00FF00".to_string()),
            phase: create_rw_signal(RevealPhase::Idle),
            frame_count: create_rw_signal(0),
        }
    }

    /// Replace every signal with the frame's values in one batch.
    pub fn apply(&self, frame: &Frame) {
        batch(|| {
            self.window.set(frame.window.clone());
            self.metrics.set(frame.metrics);
            self.overlay.set(frame.overlay.clone());
            self.price_color.set(frame.price_color.clone());
            self.phase.set(frame.phase);
            self.frame_count.set(frame.sequence);
        });
    }

    /// `total` / `change USD` header text, empty before the first sample.
    pub fn header_text(&self) -> (String, String) {
        self.metrics
            .with_untracked(|metrics| metrics.map(|m| (m.total_text(), m.change_text())))
            .unwrap_or_default()
    }
}

impl Default for FrameSignals {
    fn default() -> Self {
        Self::new()
    }
}

static FRAME_SIGNALS: OnceCell<FrameSignals> = OnceCell::new();

pub fn frame_signals() -> &'static FrameSignals {
    FRAME_SIGNALS.get_or_init(FrameSignals::new)
}

global_signals! {
    pub visible_samples => window: Vec<Sample>,
    pub current_metrics => metrics: Option<Metrics>,
    pub overlay_primitives => overlay: Vec<DrawPrimitive>,
    pub price_color => price_color: String,
    pub reveal_phase => phase: RevealPhase,
    pub frame_count => frame_count: u64,
}
