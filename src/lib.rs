//! Live price feed engine: a bounded sliding window of synthetic samples,
//! derived metrics, an annotation overlay and chart render options, all
//! driven through a single ordered mutation queue.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

pub use application::{FeedEngine, FeedSession, ManualScheduler, Mutation, TickScheduler};
pub use domain::config::{EngineConfig, EngineVariant};
pub use domain::errors::AppError;
pub use domain::state::Frame;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Install the panic hook, console logger and browser clock.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new_development()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
    crate::log_info!(domain::logging::LogComponent::Presentation("Initialize"), "🚀 Live feed chart initialized");
}
