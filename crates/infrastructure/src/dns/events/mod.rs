pub mod emitter;
pub mod types;

pub use emitter::LookupEventEmitter;
pub use types::{LookupStep, StepDecision};
