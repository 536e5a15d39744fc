//! Application layer for ucgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, Executor)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ActionOutcome, ActionResult, Executor, GenerateService, GenerationReport};

pub use ports::Filesystem;

pub use error::ApplicationError;
