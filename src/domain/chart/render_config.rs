//! Chart presentation options, derived from scratch from the window on every
//! change. Nothing here holds state.

use super::value_objects::axis_domain;
use crate::domain::feed::{Direction, Window, point_directions};
use serde::Serialize;

const AXIS_COLOR: &str = "#fff";
const GRID_COLOR: &str = "#555";
const LINE_COLOR: &str = "#b2e400";

/// Inputs that are not window content.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub up_color: String,
    pub down_color: String,
    pub dual_axis: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { up_color: "#00FF00".to_string(), down_color: "#FF0000".to_string(), dual_axis: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
    pub dataset: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: Toggle,
    pub tooltip: TooltipOptions,
    pub zoom: ZoomPlugin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub enabled: bool,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomPlugin {
    pub zoom: ZoomOptions,
    pub pan: PanOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomOptions {
    pub enabled: bool,
    pub mode: String,
    pub speed: f64,
    pub threshold: f64,
    pub wheel: WheelOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelOptions {
    pub enabled: bool,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanOptions {
    pub enabled: bool,
    pub mode: String,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y1: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub title: AxisTitle,
    pub ticks: ColorOnly,
    pub grid: GridOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOnly {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub color: String,
    pub draw_on_chart_area: bool,
}

/// Line dataset styling, including the per-point direction colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    pub label: String,
    pub border_color: String,
    pub fill: bool,
    pub tension: f64,
    pub point_style: String,
    pub point_radius: Vec<f64>,
    pub point_hover_radius: f64,
    pub point_background_color: Vec<String>,
}

impl ChartOptions {
    pub fn build(window: &Window, style: &RenderStyle) -> Self {
        let (min, max) = axis_domain(window);
        let value_axis = |position: &str, draw_grid: bool| Axis {
            position: Some(position.to_string()),
            title: axis_title("Value in USD"),
            ticks: ColorOnly { color: AXIS_COLOR.to_string() },
            grid: GridOptions { color: GRID_COLOR.to_string(), draw_on_chart_area: draw_grid },
            min: Some(min),
            max: Some(max),
        };

        Self {
            responsive: true,
            plugins: Plugins {
                title: Toggle { display: false },
                tooltip: TooltipOptions { enabled: true, position: "nearest".to_string() },
                zoom: ZoomPlugin {
                    zoom: ZoomOptions {
                        enabled: true,
                        mode: "xy".to_string(),
                        speed: 0.1,
                        threshold: 10.0,
                        wheel: WheelOptions { enabled: true, speed: 0.05 },
                    },
                    pan: PanOptions { enabled: true, mode: "xy".to_string(), speed: 10.0 },
                },
            },
            scales: Scales {
                x: Axis {
                    position: None,
                    title: axis_title("Time"),
                    ticks: ColorOnly { color: AXIS_COLOR.to_string() },
                    grid: GridOptions { color: GRID_COLOR.to_string(), draw_on_chart_area: true },
                    min: None,
                    max: None,
                },
                y: value_axis("right", true),
                // Left mirror of the value axis; its grid would double the right one.
                y1: style.dual_axis.then(|| value_axis("left", false)),
            },
            dataset: DatasetStyle::build(window, style),
        }
    }
}

impl DatasetStyle {
    pub fn build(window: &Window, style: &RenderStyle) -> Self {
        let last = window.len().saturating_sub(1);
        let point_radius =
            (0..window.len()).map(|i| if i == last { 5.0 } else { 3.0 }).collect();
        let point_background_color = point_directions(window)
            .into_iter()
            .map(|direction| match direction {
                Direction::Up => style.up_color.clone(),
                Direction::Down => style.down_color.clone(),
            })
            .collect();

        Self {
            label: "Asset Value".to_string(),
            border_color: LINE_COLOR.to_string(),
            fill: true,
            tension: 0.8,
            point_style: "circle".to_string(),
            point_radius,
            point_hover_radius: 8.0,
            point_background_color,
        }
    }
}

fn axis_title(text: &str) -> AxisTitle {
    AxisTitle { display: true, text: text.to_string(), color: AXIS_COLOR.to_string() }
}
