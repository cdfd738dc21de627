use super::value_objects::{CoordinateMapper, SurfaceSize};
use crate::domain::feed::{Direction, Sample, Window};
use serde::{Deserialize, Serialize};

/// Measures rendered text width in pixels for a CSS font string.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font: &str) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    Middle,
    Bottom,
}

/// Draw command handed to the painter. Coordinates are surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawPrimitive {
    FillRect { x: f64, y: f64, width: f64, height: f64, color: String, alpha: f64 },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: String,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        /// Radians, applied around `(x, y)`.
        rotation: f64,
    },
    DashedLine { x1: f64, y1: f64, x2: f64, y2: f64, color: String, alpha: f64, width: f64, dash: [f64; 2] },
    FillCircle { cx: f64, cy: f64, radius: f64, color: String },
}

/// What to draw at a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnnotationKind {
    /// Value box above the point.
    Callout,
    /// Value box plus dashed cross-hair, marker dot and a rotated caption.
    CrossHair { caption: String },
}

/// A named offset from the newest sample (`offset = 0` is the newest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTarget {
    pub name: String,
    pub offset: usize,
    pub kind: AnnotationKind,
}

impl AnnotationTarget {
    pub fn callout(name: &str, offset: usize) -> Self {
        Self { name: name.to_string(), offset, kind: AnnotationKind::Callout }
    }

    pub fn cross_hair(name: &str, offset: usize, caption: &str) -> Self {
        Self {
            name: name.to_string(),
            offset,
            kind: AnnotationKind::CrossHair { caption: caption.to_string() },
        }
    }

    /// "Current" at `len-1`, "Current-marker" at `len-2`, "End-marker" at `len-9`.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::callout("Current", 0),
            Self::cross_hair("Current-marker", 1, "Current"),
            Self::cross_hair("End-marker", 8, "End"),
        ]
    }

    /// The target's sample and the one right before it, if it has one.
    pub fn resolve<'w>(&self, window: &'w Window) -> Option<(&'w Sample, Option<&'w Sample>)> {
        let sample = window.tail(self.offset)?;
        Some((sample, window.tail(self.offset + 1)))
    }

    /// Direction of the target's own adjacent pair, independent of the
    /// window-level metrics.
    pub fn local_direction(&self, window: &Window) -> Option<Direction> {
        let (sample, previous) = self.resolve(window)?;
        let current = sample.value();
        Some(Direction::between(current, previous.map(Sample::value).unwrap_or(current)))
    }
}

/// Colors, fonts and sizes of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub up_color: String,
    pub down_color: String,
    pub box_color: String,
    pub box_alpha: f64,
    pub value_font: String,
    pub caption_font: String,
    pub cross_hair_color: String,
    pub cross_hair_alpha: f64,
    pub cross_hair_dash: [f64; 2],
    pub marker_radius: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            up_color: "#00FF00".to_string(),
            down_color: "#FF0000".to_string(),
            box_color: "#ccc".to_string(),
            box_alpha: 0.8,
            value_font: "bold 12px Arial".to_string(),
            caption_font: "11px Arial".to_string(),
            cross_hair_color: "#ffffff".to_string(),
            cross_hair_alpha: 0.6,
            cross_hair_dash: [6.0, 4.0],
            marker_radius: 5.0,
        }
    }
}

impl OverlayStyle {
    pub fn color_for(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.up_color,
            Direction::Down => &self.down_color,
        }
    }
}

const TEXT_HEIGHT: f64 = 20.0;
const BOX_PADDING_X: f64 = 10.0;
const BOX_PADDING_Y: f64 = 5.0;
const TEXT_LIFT: f64 = 10.0;
const CAPTION_OFFSET: f64 = 12.0;

/// Callout text for a value: `$3446.00 USD`
pub fn callout_text(value: f64) -> String {
    format!("${:.2} USD", value)
}

/// Annotation overlay: turns the window and a declarative target list into
/// draw primitives. Pure; the same inputs always produce the same output.
pub struct OverlayRenderer<'a> {
    pub mapper: &'a dyn CoordinateMapper,
    pub measurer: &'a dyn TextMeasurer,
    pub surface: SurfaceSize,
    pub style: &'a OverlayStyle,
}

impl<'a> OverlayRenderer<'a> {
    pub fn new(
        mapper: &'a dyn CoordinateMapper,
        measurer: &'a dyn TextMeasurer,
        surface: SurfaceSize,
        style: &'a OverlayStyle,
    ) -> Self {
        Self { mapper, measurer, surface, style }
    }

    pub fn render(&self, window: &Window, targets: &[AnnotationTarget]) -> Vec<DrawPrimitive> {
        let mut primitives = Vec::new();
        for target in targets {
            // Targets past the head of the window are simply not drawn.
            let Some((sample, _)) = target.resolve(window) else {
                continue;
            };
            let Some(direction) = target.local_direction(window) else {
                continue;
            };
            let index = window.len() - 1 - target.offset;
            let x = self.mapper.x_for(index, sample.label().value());
            let y = self.mapper.y_for(sample.value());
            let color = self.style.color_for(direction);

            if let AnnotationKind::CrossHair { caption } = &target.kind {
                self.push_cross_hair(&mut primitives, x, y, caption, color);
            }
            self.push_callout(&mut primitives, x, y, sample.value(), color);
        }
        primitives
    }

    fn push_callout(&self, out: &mut Vec<DrawPrimitive>, x: f64, y: f64, value: f64, color: &str) {
        let text = callout_text(value);
        let text_width = self.measurer.text_width(&text, &self.style.value_font);

        out.push(DrawPrimitive::FillRect {
            x: x - text_width / 2.0 - BOX_PADDING_X,
            y: y - TEXT_HEIGHT - BOX_PADDING_Y,
            width: text_width + 2.0 * BOX_PADDING_X,
            height: TEXT_HEIGHT + 2.0 * BOX_PADDING_Y,
            color: self.style.box_color.clone(),
            alpha: self.style.box_alpha,
        });
        out.push(DrawPrimitive::Text {
            x,
            y: y - TEXT_LIFT,
            text,
            color: color.to_string(),
            font: self.style.value_font.clone(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            rotation: 0.0,
        });
    }

    fn push_cross_hair(&self, out: &mut Vec<DrawPrimitive>, x: f64, y: f64, caption: &str, color: &str) {
        let line = |x1, y1, x2, y2| DrawPrimitive::DashedLine {
            x1,
            y1,
            x2,
            y2,
            color: self.style.cross_hair_color.clone(),
            alpha: self.style.cross_hair_alpha,
            width: 1.0,
            dash: self.style.cross_hair_dash,
        };
        out.push(line(x, 0.0, x, self.surface.height));
        out.push(line(0.0, y, self.surface.width, y));
        out.push(DrawPrimitive::FillCircle {
            cx: x,
            cy: y,
            radius: self.style.marker_radius,
            color: color.to_string(),
        });
        out.push(DrawPrimitive::Text {
            x: x + CAPTION_OFFSET,
            y: y - CAPTION_OFFSET,
            text: caption.to_string(),
            color: self.style.cross_hair_color.clone(),
            font: self.style.caption_font.clone(),
            align: TextAlign::Left,
            baseline: TextBaseline::Bottom,
            rotation: -std::f64::consts::FRAC_PI_2,
        });
    }
}
