//! Infrastructure adapters: console logging, clocks, text metrics and the
//! browser timers.

pub mod services;
pub mod text_metrics;
#[cfg(target_arch = "wasm32")]
pub mod timers;
