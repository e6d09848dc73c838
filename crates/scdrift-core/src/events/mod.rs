//! Event system: handler trait, synchronous dispatcher, payload types.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::TrainerEventHandler;
pub use types::*;
