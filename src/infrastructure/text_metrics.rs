use crate::domain::chart::TextMeasurer;

const DEFAULT_FONT_PX: f64 = 12.0;
const AVERAGE_GLYPH_WIDTH: f64 = 0.6;

/// Pixel size out of a CSS font shorthand such as `bold 12px Arial`.
pub fn font_px(font: &str) -> f64 {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px").and_then(|px| px.parse::<f64>().ok()))
        .unwrap_or(DEFAULT_FONT_PX)
}

/// Width estimate without a canvas: average glyph width times length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn text_width(&self, text: &str, font: &str) -> f64 {
        text.chars().count() as f64 * font_px(font) * AVERAGE_GLYPH_WIDTH
    }
}

/// Measures with the real canvas font metrics.
#[cfg(target_arch = "wasm32")]
pub struct CanvasTextMeasurer {
    context: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasTextMeasurer {
    pub fn new(context: web_sys::CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

#[cfg(target_arch = "wasm32")]
impl TextMeasurer for CanvasTextMeasurer {
    fn text_width(&self, text: &str, font: &str) -> f64 {
        self.context.set_font(font);
        self.context
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or_else(|_| ApproxTextMeasurer.text_width(text, font))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pixel_size_from_font() {
        assert_eq!(font_px("bold 12px Arial"), 12.0);
        assert_eq!(font_px("11px Arial"), 11.0);
        assert_eq!(font_px("Arial"), DEFAULT_FONT_PX);
    }

    #[test]
    fn width_scales_with_length() {
        let measurer = ApproxTextMeasurer;
        assert_eq!(measurer.text_width("", "10px Arial"), 0.0);
        assert_eq!(measurer.text_width("abcd", "10px Arial"), 24.0);
    }
}
