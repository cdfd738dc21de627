//! Presentation layer: Leptos signals for a UI shell and, on wasm32, the
//! JavaScript handle plus a canvas painter.

pub mod frame_listeners;
pub mod signals;

#[cfg(target_arch = "wasm32")]
pub mod canvas_painter;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;
