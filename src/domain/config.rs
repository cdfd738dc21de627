use crate::domain::chart::{Color, OverlayStyle, RenderStyle, SurfaceSize};
use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::feed::{Sample, Window};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Which timers a session runs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum EngineVariant {
    /// Live ticks only; the seed is visible at once.
    #[default]
    #[strum(serialize = "live")]
    #[serde(rename = "live")]
    Live,
    /// Seed is replayed point by point, then live ticks take over.
    #[strum(serialize = "reveal")]
    #[serde(rename = "reveal")]
    Reveal,
}

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_LIVE_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_REVEAL_INTERVAL_MS: u32 = 4000;

/// Seed labels and values of a fresh session.
pub fn default_seed() -> Vec<Sample> {
    [
        ("18:46:45", 3440.0),
        ("18:47:00", 3442.0),
        ("18:47:15", 3444.0),
        ("18:47:30", 3443.0),
        ("18:47:45", 3445.0),
        ("18:48:00", 3444.0),
    ]
    .into_iter()
    .map(|(label, value)| Sample::new(label, value))
    .collect()
}

/// Engine configuration. JSON keys are camelCase; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub capacity: usize,
    pub live_interval_ms: u32,
    pub reveal_interval_ms: u32,
    pub up_color: String,
    pub down_color: String,
    pub variant: EngineVariant,
    pub dual_axis: bool,
    pub surface_width: f64,
    pub surface_height: f64,
    pub seed: Vec<Sample>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let surface = SurfaceSize::default();
        Self {
            capacity: DEFAULT_CAPACITY,
            live_interval_ms: DEFAULT_LIVE_INTERVAL_MS,
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            up_color: "#00FF00".to_string(),
            down_color: "#FF0000".to_string(),
            variant: EngineVariant::Live,
            dual_axis: false,
            surface_width: surface.width,
            surface_height: surface.height,
            seed: default_seed(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_variant(mut self, variant: EngineVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(AppError::ValidationError("capacity must be at least 1".to_string()));
        }
        if self.live_interval_ms == 0 || self.reveal_interval_ms == 0 {
            return Err(AppError::ValidationError("tick intervals must be positive".to_string()));
        }
        for (name, color) in [("upColor", &self.up_color), ("downColor", &self.down_color)] {
            if Color::parse(color).is_none() {
                return Err(AppError::ValidationError(format!("{name} is not a hex color: {color}")));
            }
        }
        if self.seed.is_empty() {
            return Err(AppError::ValidationError("seed must contain at least one sample".to_string()));
        }
        if self.seed.len() > self.capacity {
            return Err(AppError::ValidationError(format!(
                "seed has {} samples but capacity is {}",
                self.seed.len(),
                self.capacity
            )));
        }
        if !(self.surface_width > 0.0 && self.surface_height > 0.0) {
            return Err(AppError::ValidationError("surface must have a positive size".to_string()));
        }
        Ok(())
    }

    pub fn live_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.live_interval_ms))
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.reveal_interval_ms))
    }

    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.surface_width, self.surface_height)
    }

    pub fn seed_window(&self) -> Window {
        Window::with_seed(self.capacity, self.seed.iter().cloned())
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            up_color: self.up_color.clone(),
            down_color: self.down_color.clone(),
            ..OverlayStyle::default()
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            up_color: self.up_color.clone(),
            down_color: self.down_color.clone(),
            dual_axis: self.dual_axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = EngineConfig::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.live_interval(), Duration::from_millis(2000));
        assert_eq!(config.reveal_interval(), Duration::from_millis(4000));
        assert_eq!(config.up_color, "#00FF00");
        assert_eq!(config.down_color, "#FF0000");
        assert_eq!(config.seed.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn variant_parses_from_str() {
        assert_eq!("reveal".parse::<EngineVariant>(), Ok(EngineVariant::Reveal));
        assert_eq!(EngineVariant::Live.as_ref(), "live");
    }
}
