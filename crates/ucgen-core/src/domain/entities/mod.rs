pub mod common;
pub mod request;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use request::GenerationRequest;
