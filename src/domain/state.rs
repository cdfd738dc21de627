use crate::domain::chart::{ChartOptions, DrawPrimitive};
use crate::domain::feed::{Metrics, RevealPhase, Sample};
use serde::Serialize;

/// Everything the painter needs after one applied mutation.
///
/// Built from scratch by the engine each time; readers never patch it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Increases by one per published frame.
    pub sequence: u64,
    pub phase: RevealPhase,
    /// Visible samples, oldest first.
    pub window: Vec<Sample>,
    pub metrics: Option<Metrics>,
    /// Color of the price header and change badge.
    pub price_color: String,
    pub overlay: Vec<DrawPrimitive>,
    pub options: ChartOptions,
}

impl Frame {
    pub fn latest_value(&self) -> Option<f64> {
        self.window.last().map(Sample::value)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}
