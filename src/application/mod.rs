//! Application layer: the engine actor, its mutation queue and the session
//! that wires timers to it.

pub mod engine;
pub mod mutation_queue;
pub mod scheduler;
pub mod session;

pub use engine::*;
pub use mutation_queue::*;
pub use scheduler::*;
pub use session::*;
