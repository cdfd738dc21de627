//! Chart aggregate: coordinate mapping, annotation overlay and render options.

pub mod annotations;
pub mod render_config;
pub mod value_objects;

pub use annotations::*;
pub use render_config::*;
pub use value_objects::*;
