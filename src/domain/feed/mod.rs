//! Feed aggregate: samples, the sliding window, derived metrics and the
//! seed reveal state machine.

pub mod entities;
pub mod reveal;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use reveal::*;
pub use services::*;
pub use value_objects::*;
