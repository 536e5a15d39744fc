//! Domain value objects: Identifier, HttpMethod.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Validation happens once, at construction; everything downstream receives
//! an already-valid value and never re-checks it.

use crate::domain::{error::DomainError, naming};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Identifier ────────────────────────────────────────────────────────────────

/// A hyphen-delimited lowercase name, e.g. `get-product`.
///
/// Invariant: matches `^[a-z][a-z0-9]*(-[a-z0-9]+)*$`. Every casing variant
/// (camel, Pascal, CONST) is derived on demand from this single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `value` as the identifier for `field`.
    ///
    /// `field` only feeds the error message (`domain`, `use case`, `api`).
    pub fn parse(field: &'static str, value: &str) -> Result<Self, DomainError> {
        match check_identifier(value) {
            Ok(()) => Ok(Self(value.to_string())),
            Err(reason) => Err(DomainError::InvalidIdentifier {
                field,
                value: value.to_string(),
                reason,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `get-product` → `getProduct`
    pub fn camel(&self) -> String {
        naming::to_camel_case(&self.0)
    }

    /// `get-product` → `GetProduct`
    pub fn pascal(&self) -> String {
        naming::to_pascal_case(&self.0)
    }

    /// `get-product` → `GET_PRODUCT`
    pub fn constant(&self) -> String {
        naming::to_const_case(&self.0)
    }

    /// `get-product` → `get/product`
    pub fn path_segments(&self) -> String {
        naming::to_path_segments(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("identifier", s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check the identifier grammar, returning the first violated rule.
fn check_identifier(value: &str) -> Result<(), &'static str> {
    let Some(first) = value.chars().next() else {
        return Err("must not be empty");
    };
    if !first.is_ascii_lowercase() {
        return Err("must start with a lowercase letter");
    }
    if value.ends_with('-') {
        return Err("must not end with '-'");
    }
    if value.contains("--") {
        return Err("must not contain consecutive '-'");
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("may only contain lowercase letters, digits and '-'");
    }
    Ok(())
}

// ── HttpMethod ────────────────────────────────────────────────────────────────

/// HTTP verb of the generated API client method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(DomainError::InvalidHttpMethod {
                value: s.to_string(),
            }),
        }
    }
}
