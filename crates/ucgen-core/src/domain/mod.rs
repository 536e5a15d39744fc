//! Core domain layer for ucgen.
//!
//! Pure logic only: validated identifiers, naming conventions, template
//! rendering, the registry document model and the file planner.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem or process state; the project root is data
//! - **No async**: Domain logic is synchronous
//! - **No tracing**: Observability belongs to the application layer
//! - **Immutable inputs**: Requests and plans are Clone + PartialEq
pub mod api_client;
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod template;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    request::{
        DEFAULT_API_PREFIX, DEFAULT_EXTENSION, GenerationOptions, GenerationRequest,
        GenerationRequestBuilder,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use plan::{ActionKind, FileAction, Plan, ProjectSnapshot, plan};
pub use registry::{RegistryDocument, RegistryIssue, RegistryKind};
pub use template::{RenderContext, TemplateKind, TemplateParams, render};
pub use validation::DomainValidator;
pub use value_objects::{HttpMethod, Identifier};
