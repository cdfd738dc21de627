pub mod chart;
pub mod config;
pub mod errors;
pub mod events;
pub mod feed;
pub mod logging;
pub mod state;
