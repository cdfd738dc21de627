use crate::domain::chart::{CoordinateMapper, DrawPrimitive, SurfaceSize, TextAlign, TextBaseline, Viewport};
use crate::domain::feed::Window;
use crate::domain::state::Frame;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#1e1e1e";
const SERIES_COLOR: &str = "#b2e400";

/// Paints frames onto a 2D canvas: a plain series line, then the overlay.
pub struct CanvasPainter {
    context: CanvasRenderingContext2d,
    surface: SurfaceSize,
}

impl CanvasPainter {
    pub fn from_canvas_id(canvas_id: &str, surface: SurfaceSize) -> Result<Self, JsValue> {
        let canvas = gloo::utils::document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{canvas_id}' not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        canvas.set_width(surface.width as u32);
        canvas.set_height(surface.height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to 2D context"))?;
        Ok(Self { context, surface })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    pub fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.surface.width, self.surface.height);

        self.paint_series(frame);
        for primitive in &frame.overlay {
            self.paint_primitive(primitive)?;
        }
        Ok(())
    }

    fn paint_series(&self, frame: &Frame) {
        let window = Window::with_seed(frame.window.len().max(1), frame.window.iter().cloned());
        let viewport = Viewport::fit(&window, self.surface);
        let ctx = &self.context;

        ctx.set_stroke_style_str(SERIES_COLOR);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (index, sample) in window.iter().enumerate() {
            let (x, y) = (viewport.x_for(index, sample.label()), viewport.y_for(sample.value()));
            if index == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        let dataset = &frame.options.dataset;
        for (index, sample) in window.iter().enumerate() {
            let color = dataset.point_background_color.get(index).map(String::as_str).unwrap_or(SERIES_COLOR);
            let radius = dataset.point_radius.get(index).copied().unwrap_or(3.0);
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            let _ = ctx.arc(
                viewport.x_for(index, sample.label()),
                viewport.y_for(sample.value()),
                radius,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    fn paint_primitive(&self, primitive: &DrawPrimitive) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.save();
        match primitive {
            DrawPrimitive::FillRect { x, y, width, height, color, alpha } => {
                ctx.set_global_alpha(*alpha);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawPrimitive::Text { x, y, text, color, font, align, baseline, rotation } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                ctx.set_text_baseline(match baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Bottom => "bottom",
                });
                ctx.translate(*x, *y)?;
                ctx.rotate(*rotation)?;
                ctx.fill_text(text, 0.0, 0.0)?;
            }
            DrawPrimitive::DashedLine { x1, y1, x2, y2, color, alpha, width, dash } => {
                let pattern = js_sys::Array::of2(&dash[0].into(), &dash[1].into());
                ctx.set_line_dash(&pattern)?;
                ctx.set_global_alpha(*alpha);
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.begin_path();
                ctx.move_to(*x1, *y1);
                ctx.line_to(*x2, *y2);
                ctx.stroke();
            }
            DrawPrimitive::FillCircle { cx, cy, radius, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(*cx, *cy, *radius, 0.0, std::f64::consts::TAU)?;
                ctx.fill();
            }
        }
        ctx.restore();
        Ok(())
    }
}
