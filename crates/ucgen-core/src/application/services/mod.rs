//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate one use case" or "inspect a registry".

pub mod executor;
pub mod generate_service;

pub use executor::{ActionOutcome, ActionResult, Executor, GenerationReport};
pub use generate_service::GenerateService;
