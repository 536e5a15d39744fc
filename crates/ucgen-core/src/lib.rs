//! ucgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ucgen
//! use-case scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            ucgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (GenerateService, Executor)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ucgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Identifier, templates, registry store,│
//! │               planner)                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ucgen_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> UcgenResult<()> {
//! let request = GenerationRequest::builder()
//!     .domain("products")
//!     .use_case("get-product")
//!     .api("products")
//!     .method("GET")
//!     .project_root("./shop")
//!     .build()?;
//!
//! let report = GenerateService::new(filesystem).generate(&request)?;
//! assert!(!report.has_failures());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ActionOutcome, ActionResult, ApplicationError, Executor, GenerateService, GenerationReport,
        ports::Filesystem,
    };
    pub use crate::domain::{
        ActionKind, DomainError, FileAction, GenerationOptions, GenerationRequest, HttpMethod,
        Identifier, Plan, RegistryDocument, RegistryKind, RelativePath,
    };
    pub use crate::error::{ErrorCategory, UcgenError, UcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
